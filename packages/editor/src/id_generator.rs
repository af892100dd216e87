use crc32fast::Hasher;

/// Hands out instance ids of the form `<seed>-<n>`, where the seed is the
/// CRC32 of the session name in hex and `n` counts up from 1
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String,
    issued: u32,
}

impl IDGenerator {
    pub fn new(session_name: &str) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(session_name.as_bytes());

        Self {
            seed: format!("{:x}", hasher.finalize()),
            issued: 0,
        }
    }

    pub fn new_id(&mut self) -> String {
        self.issued += 1;
        format!("{}-{}", self.seed, self.issued)
    }
}
