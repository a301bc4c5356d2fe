use std::{
    env::{self, VarError},
    sync::OnceLock,
};

use eyre::Result;

static CONFIG: OnceLock<Config> = OnceLock::new();

pub struct Config {
    pub log_dir: Box<str>,
    pub log_file: Box<str>,
}

impl Config {
    pub fn get() -> &'static Self {
        CONFIG.get().expect("CONFIG not yet initialized")
    }
}

pub fn init() -> Result<()> {
    let config = Config {
        log_dir: env_var_or("LOG_DIR", "./logs")?,
        log_file: env_var_or("LOG_FILE", "fanart-community.log")?,
    };

    CONFIG
        .set(config)
        .map_err(|_| eyre!("`Config::init` has already been called"))
}

trait EnvKind: Sized {
    const EXPECTED: &'static str;

    fn from_str(s: String) -> Result<Self, String>;
}

macro_rules! env_kind {
    ($($ty:ty: $arg:ident => $impl:block,)*) => {
        $(
            impl EnvKind for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_str($arg: String) -> Result<Self, String> {
                    $impl
                }
            }
        )*
    };
}

env_kind! {
    Box<str>: s => {
        if s.trim().is_empty() {
            Err(s)
        } else {
            Ok(s.into_boxed_str())
        }
    },
}

fn env_var_or<T: EnvKind>(name: &'static str, default: &str) -> Result<T> {
    let value = match env::var(name) {
        Ok(value) => value,
        Err(VarError::NotPresent) => default.to_owned(),
        Err(VarError::NotUnicode(value)) => {
            bail!("env variable `{name}={value:?}` is not valid unicode")
        }
    };

    T::from_str(value).map_err(|value| {
        eyre!(
            "failed to parse env variable `{name}={value}`; expected non-empty {expected}",
            expected = T::EXPECTED
        )
    })
}
