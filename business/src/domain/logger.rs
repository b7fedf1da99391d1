/// Logging port used by the use cases.
///
/// Kept as a trait so the business layer never depends on a concrete
/// logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
