pub mod gemini;
pub mod geolocation;
