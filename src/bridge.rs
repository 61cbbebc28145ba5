use crate::error::GreetingError;
use crate::greeting::Greeting;
use crate::native::NativeGreeter;
use crate::source::GreetingSource;
use std::ffi::OsStr;
use std::io::{self, Write};
use tracing::debug;

/// Which of the two terminal states a run ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The source had no greeting; only the diagnostic line was written.
    PrintedError,
    /// The greeting, the fixed line and the usage line were written.
    PrintedSuccess,
}

/// Fetches a greeting from a [`GreetingSource`] and prints it.
pub struct Greeter<S> {
    source: S,
}

impl<S> Greeter<S>
where
    S: GreetingSource,
{
    pub fn new(source: S) -> Self {
        Greeter { source }
    }

    /// Writes the greeting sequence to `out`.
    ///
    /// `args` are the process's invocation arguments; only the first one,
    /// the program path, is read and it is echoed byte-for-byte. A missing
    /// program path is echoed as an empty string.
    ///
    /// An unavailable greeting is not an error of this function: it writes
    /// the diagnostic line and returns [`Outcome::PrintedError`]. Errors are
    /// returned only when writing to `out` fails.
    pub fn run_greeting<A, W>(&self, args: &[A], out: &mut W) -> io::Result<Outcome>
    where
        A: AsRef<OsStr>,
        W: Write + ?Sized,
    {
        let greeting = match self.fetch() {
            Ok(greeting) => greeting,
            Err(err) => {
                debug!(%err, "no greeting from native side");
                writeln!(out, "Error: {}", err)?;
                out.flush()?;
                return Ok(Outcome::PrintedError);
            }
        };

        let program = args
            .first()
            .map_or_else(|| OsStr::new(""), |arg| arg.as_ref());

        writeln!(out, "Rust gets: {}", greeting)?;
        writeln!(out, "Hello World from Rust!")?;
        out.write_all(b"Usage: ")?;
        out.write_all(program.as_encoded_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;

        Ok(Outcome::PrintedSuccess)
    }

    fn fetch(&self) -> Result<Greeting, GreetingError> {
        let greeting = self
            .source
            .native_greeting()
            .ok_or(GreetingError::NativeGreetingUnavailable)?;
        debug!(?greeting, "received greeting");
        Ok(greeting)
    }
}

/// Runs the greeting sequence against the linked C routine, writing to
/// standard output.
pub fn run<A>(args: &[A]) -> io::Result<Outcome>
where
    A: AsRef<OsStr>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Greeter::new(NativeGreeter::new()).run_greeting(args, &mut out)
}
