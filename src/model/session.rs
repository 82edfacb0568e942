/// Client-side view of the remote shell location.
///
/// The server owns the real location; the client only echoes back whatever
/// path the last successful execution reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    current_path: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Session {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: normalize_path(path.into()),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Path shown in the prompt; long paths keep their tail.
    pub fn prompt_path(&self) -> String {
        const MAX: usize = 15;
        const DOTS: &str = "...";
        let count = self.current_path.chars().count();
        if count <= MAX {
            return self.current_path.clone();
        }
        let keep = MAX - DOTS.len();
        let tail: String = self.current_path.chars().skip(count - keep).collect();
        format!("{}{}", DOTS, tail)
    }

    pub fn prompt(&self) -> String {
        format!("jcr-shell:{}>", self.prompt_path())
    }
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
#[path = "../tests/model/session_tests.rs"]
mod tests;
