// Root app shell and re-exports for workspace crates used by bins.
pub use controller_core as controller;
pub use data_runtime as data;
pub use platform_winit;
