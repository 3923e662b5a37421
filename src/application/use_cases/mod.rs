//! Use case implementations.

mod navigate_use_case;

pub use navigate_use_case::NavigateUseCase;
