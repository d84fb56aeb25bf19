use std::fmt;

#[derive(Debug)]
pub enum SceneError {
    ConfigRead(std::io::Error),
    ConfigParse(ron::error::SpannedError),
    InvalidConfig(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::ConfigRead(e) => write!(f, "could not read scene config: {}", e),
            SceneError::ConfigParse(e) => write!(f, "could not parse scene config: {}", e),
            SceneError::InvalidConfig(reason) => write!(f, "invalid scene config: {}", reason),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::ConfigRead(e) => Some(e),
            SceneError::ConfigParse(e) => Some(e),
            SceneError::InvalidConfig(_) => None,
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(error: std::io::Error) -> Self {
        SceneError::ConfigRead(error)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(error: ron::error::SpannedError) -> Self {
        SceneError::ConfigParse(error)
    }
}

impl From<&str> for SceneError {
    fn from(error: &str) -> Self {
        SceneError::InvalidConfig(error.to_string())
    }
}
