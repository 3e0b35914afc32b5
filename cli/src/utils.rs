use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read a stored credential string from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
/// One trailing newline is removed, since stores never write one.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    let buffer = match file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    let mut contents = String::from_utf8(buffer)?;
    if contents.ends_with('\n') {
        contents.pop();
        if contents.ends_with('\r') {
            contents.pop();
        }
    }
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_input;

    #[test]
    fn test_read_input_strips_one_newline() {
        let path = std::env::temp_dir().join(format!("creds-read-input-{}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"abc123\n\n").unwrap();
        drop(file);

        let got = read_input(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!("abc123\n", got);
    }
}
