// Template personalization: placeholder vocabulary, substitution, built-in template.

pub mod handlers;
pub mod personalizer;
pub mod placeholders;
pub mod templates;
