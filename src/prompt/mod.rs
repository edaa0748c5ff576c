pub mod builder;
pub mod parameters;
pub mod prompts;
pub mod renderer;
