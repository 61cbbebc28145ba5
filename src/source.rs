use crate::greeting::Greeting;

/// Something that can be asked for a greeting.
///
/// Implementations return `None` to signal that no greeting is available.
/// A call must not block indefinitely and must not touch process-wide state.
pub trait GreetingSource {
    fn native_greeting(&self) -> Option<Greeting>;
}

impl<F> GreetingSource for F
where
    F: Fn() -> Option<Greeting>,
{
    fn native_greeting(&self) -> Option<Greeting> {
        self()
    }
}
