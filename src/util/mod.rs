pub use self::args::Args;

mod args;
