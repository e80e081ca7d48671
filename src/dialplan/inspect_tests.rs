//! Tests for dial plan inspection.

use tempfile::TempDir;

use super::{DialPrefix, IniDocument, InspectError, find_dial_prefix, inspect_dial_prefix};
use crate::merge::{UTF16LE_BOM, encode_utf16le};

fn prefix_of(text: &str) -> Option<String> {
    find_dial_prefix(&IniDocument::parse(text)).map(|p| p.to_string())
}

mod dial_prefix {
    use super::*;

    #[test]
    fn accepts_one_to_three_digits() {
        for value in ["+1", "+49", "+352"] {
            assert_eq!(DialPrefix::parse(value).unwrap().as_str(), value);
        }
    }

    #[test]
    fn rejects_other_shapes() {
        for value in ["", "+", "49", "+1234", "+4a", "++49", " +49"] {
            assert_eq!(DialPrefix::parse(value), None, "{value:?}");
        }
    }

    #[test]
    fn default_is_germany() {
        assert_eq!(DialPrefix::default().as_str(), "+49");
    }
}

mod find {
    use super::*;

    #[test]
    fn extracts_prefix_from_dial_plan() {
        assert_eq!(
            prefix_of("[Account1]\ndialPlan=<+49|0>XXXXXXXX.\n").as_deref(),
            Some("+49")
        );
    }

    #[test]
    fn takes_at_most_three_digits() {
        assert_eq!(
            prefix_of("[a]\ndialPlan=<+35212345|0>\n").as_deref(),
            Some("+352")
        );
    }

    #[test]
    fn first_section_with_a_match_wins() {
        let text = "[Settings]\ndialPlan=none\n[Account1]\ndialPlan=<+43>\n[Account2]\ndialPlan=<+41>\n";

        assert_eq!(prefix_of(text).as_deref(), Some("+43"));
    }

    #[test]
    fn leftmost_match_within_a_plan_wins() {
        assert_eq!(
            prefix_of("[a]\ndialPlan=<+1|001> <+44>\n").as_deref(),
            Some("+1")
        );
    }

    #[test]
    fn no_dial_plan_means_no_prefix() {
        assert_eq!(prefix_of("[a]\nserver=sip.example.com\n"), None);
        assert_eq!(prefix_of("[a]\ndialPlan=0XXX.\n"), None);
        assert_eq!(prefix_of(""), None);
    }

    #[test]
    fn other_options_are_not_searched() {
        assert_eq!(prefix_of("[a]\nlabel=+33 office\n"), None);
    }
}

mod inspect {
    use super::*;

    fn write_utf16(dir: &TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("MicroSIP.ini");
        let mut bytes = UTF16LE_BOM.to_vec();
        bytes.extend(encode_utf16le(text));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn reads_prefix_from_utf16_file() {
        let dir = TempDir::new().unwrap();
        let path = write_utf16(&dir, "[Account1]\r\ndialPlan=<+31|0>\r\n");

        assert_eq!(inspect_dial_prefix(&path).unwrap().as_str(), "+31");
    }

    #[test]
    fn falls_back_to_default_prefix() {
        let dir = TempDir::new().unwrap();
        let path = write_utf16(&dir, "[Settings]\r\nlocale=de\r\n");

        assert_eq!(inspect_dial_prefix(&path).unwrap(), DialPrefix::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.ini");

        let err = inspect_dial_prefix(&path).unwrap_err();

        assert!(matches!(err, InspectError::Read { .. }));
        assert!(err.to_string().contains("absent.ini"));
    }
}
