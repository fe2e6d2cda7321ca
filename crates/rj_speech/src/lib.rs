pub mod google;

pub use google::GoogleSpeech;
