pub mod derive;
pub mod pipeline;
pub mod rules;
pub mod validate;
