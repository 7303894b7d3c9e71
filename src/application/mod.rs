pub mod context;
pub mod localization;
pub mod shared;
pub mod usecases;
