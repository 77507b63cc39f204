use crate::session::Rejection;

#[derive(Debug)]
pub enum Kind {
    OsError,
    SyntaxError,
    Rejected,
    ExportError,
}

pub struct Error(Kind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: Kind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> &Kind {
        &self.0
    }

    pub fn get_error(&self) -> &Option<Box<dyn std::error::Error>> {
        &self.1
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(Kind::ExportError, e.into())
    }
}

impl From<Rejection> for Error {
    fn from(r: Rejection) -> Self {
        Self::new(Kind::Rejected, r.into())
    }
}
