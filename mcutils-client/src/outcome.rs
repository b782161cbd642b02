use mcutils_types::ErrorResponse;

/// The result of an exchange that reached the API and could be decoded.
///
/// An outcome holds exactly one of the success value or the error body reported by the API.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The API answered with a success status.
    Success(T),
    /// The API answered with a non-success status.
    Failure(ErrorResponse),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the success value, discarding a failure.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the error body, discarding a success value.
    pub fn failure(self) -> Option<ErrorResponse> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts this outcome into a [`Result`] so that failures can be propagated with `?`.
    pub fn into_result(self) -> Result<T, ErrorResponse> {
        self.into()
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorResponse> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
