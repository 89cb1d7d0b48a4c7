use std::fmt;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;

use cpu_6510::bus::Bus;

/// Failures the binary loader can hit. Everything inside the core is total;
/// only host I/O goes wrong.
#[derive(Debug)]
pub enum LoadError {
    IoError(io::Error),
    Message(String),
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::IoError(error)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(error) => write!(f, "{}", error),
            LoadError::Message(message) => write!(f, "{}", message),
        }
    }
}

/// Read a raw binary into RAM at `base`. The file has to fit below the top
/// of the 64KB address space.
pub fn load_file(bus: &mut Bus, path: &Path, base: u16) -> Result<usize, LoadError> {
    let mut file = File::open(path)
        .map_err(|error| LoadError::Message(format!("{}: {}", path.display(), error)))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    if base as usize + bytes.len() > 0x10000 {
        return Err(LoadError::Message(format!(
            "{} ({} bytes) does not fit in memory at {:#06x}",
            path.display(),
            bytes.len(),
            base
        )));
    }

    bus.load_at(&bytes, base);
    Ok(bytes.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env;

    fn scratch_file(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn loads_at_the_requested_base() {
        let path = scratch_file("loader_base.bin", &[0x11, 0x22, 0x33]);
        let mut bus = Bus::new();
        let size = load_file(&mut bus, &path, 0x4000).unwrap();
        assert_eq!(size, 3);
        assert_eq!(bus.read_u8(0x4000), 0x11);
        assert_eq!(bus.read_u8(0x4002), 0x33);
    }

    #[test]
    fn rejects_files_that_do_not_fit() {
        let path = scratch_file("loader_too_big.bin", &[0xAA; 0x20]);
        let mut bus = Bus::new();
        let result = load_file(&mut bus, &path, 0xFFF0);
        assert!(matches!(result, Err(LoadError::Message(_))));
    }

    #[test]
    fn missing_files_name_the_path() {
        let mut bus = Bus::new();
        let result = load_file(&mut bus, Path::new("does_not_exist.bin"), 0);
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("does_not_exist.bin"));
    }
}
