use http::StatusCode;
use strum_macros::Display;

#[derive(Display, Debug)]
pub enum Error {
    ApiMethod,
    ApiMissingEntry,
    ApiMissingQueryType,
    ApiUnknownQueryType,
    ApiParseId,
    ApiParseAction,
    ApiParseKind,

    InvalidWorld,
    NotFound,
    WriteDenied,
    VersionUnknown,

    ServerRunning,
    ServerNotRunning,

    Os,
    Io(std::io::Error),
    Sqlite(rusqlite::Error),
    Hyper(hyper::Error),
}

impl Error {
    /// Status code of the error reply.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::ApiMethod => StatusCode::METHOD_NOT_ALLOWED,
            Error::ApiMissingEntry
            | Error::ApiMissingQueryType
            | Error::ApiUnknownQueryType
            | Error::ApiParseId
            | Error::ApiParseAction
            | Error::ApiParseKind => StatusCode::BAD_REQUEST,
            Error::InvalidWorld | Error::NotFound => StatusCode::NOT_FOUND,
            Error::WriteDenied => StatusCode::FORBIDDEN,
            Error::VersionUnknown | Error::ServerRunning | Error::ServerNotRunning => {
                StatusCode::CONFLICT
            }
            Error::Os | Error::Io(_) | Error::Sqlite(_) | Error::Hyper(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Detail line of the error reply.
    pub fn message(&self) -> String {
        match self {
            Error::ApiMethod => "only GET and POST are served".into(),
            Error::ApiMissingEntry => "a header field is missing".into(),
            Error::ApiMissingQueryType => "the type header is missing".into(),
            Error::ApiUnknownQueryType => "no such query type".into(),
            Error::ApiParseId => "ids are 16 hex chars".into(),
            Error::ApiParseAction => "action is enter, up or initial".into(),
            Error::ApiParseKind => "kind is folder or file".into(),
            Error::InvalidWorld => "no such world".into(),
            Error::NotFound => "no such entry".into(),
            Error::WriteDenied => "not editable".into(),
            Error::VersionUnknown => "no jar for that version".into(),
            Error::ServerRunning => "server already running".into(),
            Error::ServerNotRunning => "server is not running".into(),
            Error::Os => "entropy unavailable".into(),
            Error::Io(e) => e.to_string(),
            Error::Sqlite(e) => e.to_string(),
            Error::Hyper(e) => e.to_string(),
        }
    }
}

impl std::error::Error for Error {}
