mod float32;
mod float64;

pub use float32::Float32;
pub use float64::Float64;

// Append a fractional part when the shortest round-trip text has none,
// so `3.0` renders as `3.0` and never collides with the integer `3`.
fn with_fraction(text: String) -> String {
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
