pub mod error;

pub use error::{
    FetchError, FetchReason, FetchResult, ParseError, ParseReason, ParseResult, VaultError,
};
