//! PDF object model
//!
//! The small set of basic object types from the PDF reference, plus their
//! byte serialization. Dictionaries keep insertion order so emitted files
//! are stable across runs.

/// A PDF object.
#[derive(Debug, Clone)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Literal string, written in parentheses with escaping
    Literal(Vec<u8>),
    /// Hexadecimal string, written in angle brackets
    Hex(Vec<u8>),
    Name(String),
    Array(Vec<Object>),
    Dict(Dict),
    Stream(Stream),
    /// Indirect reference (generation number is always 0 here)
    Ref(u32),
}

impl Object {
    pub fn name(s: impl Into<String>) -> Self {
        Object::Name(s.into())
    }

    pub fn literal(s: &str) -> Self {
        Object::Literal(s.as_bytes().to_vec())
    }

    /// Serialize this object into `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Object::Null => out.extend_from_slice(b"null"),
            Object::Boolean(b) => out.extend_from_slice(if *b { b"true" } else { b"false" }),
            Object::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
            Object::Real(n) => out.extend_from_slice(format_real(*n).as_bytes()),
            Object::Literal(data) => write_literal(data, out),
            Object::Hex(data) => {
                out.push(b'<');
                for byte in data {
                    out.extend_from_slice(format!("{byte:02X}").as_bytes());
                }
                out.push(b'>');
            }
            Object::Name(name) => write_name(name, out),
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    item.write_to(out);
                }
                out.push(b']');
            }
            Object::Dict(dict) => dict.write_to(out),
            Object::Stream(stream) => stream.write_to(out),
            Object::Ref(num) => out.extend_from_slice(format!("{num} 0 R").as_bytes()),
        }
    }
}

/// Format a real number without trailing zeros.
pub(crate) fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        let s = format!("{n:.4}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn write_literal(data: &[u8], out: &mut Vec<u8>) {
    out.push(b'(');
    for &byte in data {
        match byte {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(byte);
            }
            0x0A => out.extend_from_slice(b"\\n"),
            0x0D => out.extend_from_slice(b"\\r"),
            0x09 => out.extend_from_slice(b"\\t"),
            0x20..=0x7E => out.push(byte),
            _ => out.extend_from_slice(format!("\\{byte:03o}").as_bytes()),
        }
    }
    out.push(b')');
}

fn write_name(name: &str, out: &mut Vec<u8>) {
    out.push(b'/');
    for byte in name.bytes() {
        let delimiter = matches!(
            byte,
            b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%' | b'#'
        );
        if (0x21..=0x7E).contains(&byte) && !delimiter {
            out.push(byte);
        } else {
            out.extend_from_slice(format!("#{byte:02X}").as_bytes());
        }
    }
}

/// A PDF dictionary with insertion-ordered entries.
#[derive(Debug, Clone, Default)]
pub struct Dict {
    entries: Vec<(String, Object)>,
}

impl Dict {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary with its `/Type` entry already set.
    pub fn of_type(type_name: &str) -> Self {
        let mut dict = Self::new();
        dict.set("Type", Object::name(type_name));
        dict
    }

    /// Insert or replace an entry.
    pub fn set(&mut self, key: impl Into<String>, value: Object) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.push(b' ');
            write_name(key, out);
            out.push(b' ');
            value.write_to(out);
        }
        out.extend_from_slice(b" >>");
    }
}

/// A PDF stream: dictionary plus raw data.
#[derive(Debug, Clone)]
pub struct Stream {
    pub dict: Dict,
    pub data: Vec<u8>,
}

impl Stream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: Dict::new(),
            data,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        self.dict.write_to(out);
        out.extend_from_slice(b"\nstream\n");
        out.extend_from_slice(&self.data);
        out.extend_from_slice(b"\nendstream");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized(obj: &Object) -> String {
        let mut out = Vec::new();
        obj.write_to(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(serialized(&Object::Null), "null");
        assert_eq!(serialized(&Object::Boolean(false)), "false");
        assert_eq!(serialized(&Object::Integer(-7)), "-7");
        assert_eq!(serialized(&Object::Real(0.3)), "0.3");
        assert_eq!(serialized(&Object::Real(40.0)), "40");
        assert_eq!(serialized(&Object::Ref(12)), "12 0 R");
    }

    #[test]
    fn test_literal_string_escaping() {
        let obj = Object::literal("a(b)\\c");
        assert_eq!(serialized(&obj), r"(a\(b\)\\c)");
    }

    #[test]
    fn test_literal_string_non_ascii_is_octal() {
        let obj = Object::Literal(vec![0xE4]);
        assert_eq!(serialized(&obj), "(\\344)");
    }

    #[test]
    fn test_hex_string() {
        let obj = Object::Hex(vec![0x4F, 0x60]);
        assert_eq!(serialized(&obj), "<4F60>");
    }

    #[test]
    fn test_name_escaping() {
        assert_eq!(serialized(&Object::name("Type")), "/Type");
        assert_eq!(serialized(&Object::name("A B")), "/A#20B");
    }

    #[test]
    fn test_array() {
        let obj = Object::Array(vec![
            Object::Integer(1),
            Object::name("Two"),
            Object::Real(3.5),
        ]);
        assert_eq!(serialized(&obj), "[1 /Two 3.5]");
    }

    #[test]
    fn test_dict_keeps_insertion_order() {
        let mut dict = Dict::of_type("Page");
        dict.set("Zeta", Object::Integer(1));
        dict.set("Alpha", Object::Integer(2));
        let text = serialized(&Object::Dict(dict));
        let type_at = text.find("/Type").unwrap();
        let zeta_at = text.find("/Zeta").unwrap();
        let alpha_at = text.find("/Alpha").unwrap();
        assert!(type_at < zeta_at && zeta_at < alpha_at);
    }

    #[test]
    fn test_dict_set_replaces() {
        let mut dict = Dict::new();
        dict.set("Length", Object::Integer(1));
        dict.set("Length", Object::Integer(99));
        assert!(matches!(dict.get("Length"), Some(Object::Integer(99))));
        assert_eq!(serialized(&Object::Dict(dict)), "<< /Length 99 >>");
    }

    #[test]
    fn test_stream() {
        let mut stream = Stream::new(b"0 0 m".to_vec());
        stream.dict.set("Length", Object::Integer(5));
        let text = serialized(&Object::Stream(stream));
        assert_eq!(text, "<< /Length 5 >>\nstream\n0 0 m\nendstream");
    }
}
