use serde_json::ser::Formatter;
use std::io;

/// A compact JSON [`Formatter`] that writes every non-ASCII character in a
/// string as a `\uXXXX` escape (using surrogate pairs outside the BMP), so
/// the output is always pure ASCII.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiFormatter;
impl Formatter for AsciiFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut utf16_buf = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut utf16_buf) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
