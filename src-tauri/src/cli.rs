//! Launch argument handling.
//!
//! The shell takes no flag values: `-d`/`--debug`, `-p`/`--portable` and an
//! optional file path to open on startup.

/// Options derived once from the process arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    /// Open the developer tools and log at debug level.
    pub debug: bool,
    /// Keep all user data under `<cwd>/tsprofile`.
    pub portable: bool,
    /// File handed to the content layer as `?open=`.
    pub startup_file: Option<String>,
}

impl StartupConfig {
    /// Parse the arguments of the running process.
    pub fn from_env() -> Self {
        Self::parse(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()))
    }

    /// Parse a raw argument list whose first element is the program path.
    ///
    /// Unknown tokens of two characters or fewer are ignored, longer ones are
    /// taken as the startup file and the last one wins.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();

        for arg in args.into_iter().skip(1) {
            let arg = arg.as_ref();
            match arg.to_lowercase().as_str() {
                "-d" | "--debug" => config.debug = true,
                "-p" | "--portable" => config.portable = true,
                "." => {},
                _ if arg.chars().count() > 2 => config.startup_file = Some(arg.to_string()),
                _ => {},
            }
        }

        config
    }
}
