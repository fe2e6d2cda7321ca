pub mod models;

pub use models::create_model;
pub use models::dummy::DummyModel;
pub use models::gemini::GeminiModel;
