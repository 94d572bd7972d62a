use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("division not found")]
    DivisionNotFound,

    #[error("player not found")]
    PlayerNotFound,

    #[error("fixture not found")]
    FixtureNotFound,

    #[error("at least one set score is required")]
    InvalidGrid,

    #[error("a match has at most {0} sets")]
    TooManySets(usize),

    #[error("set {0} is not a pair of non-negative numbers")]
    MalformedSet(usize),

    #[error("set cannot finish level at {0}-{1}")]
    TiedSet(u32, u32),

    #[error("implausible set score {0}-{1}")]
    ImplausibleSetScore(u32, u32),

    #[error("match cannot end in a draw")]
    DrawNotAllowed,

    #[error("at least two players are needed to generate fixtures")]
    InsufficientPlayers,
}

impl Error {
    /// True for errors caused by caller input on a score grid; these never
    /// touch stored state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidGrid
                | Error::TooManySets(_)
                | Error::MalformedSet(_)
                | Error::TiedSet(_, _)
                | Error::ImplausibleSetScore(_, _)
                | Error::DrawNotAllowed
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
