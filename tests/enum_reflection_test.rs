use anyhow::Result;
use kl_toolkit::adapters::{json, yaml};
use kl_toolkit::{from_string, impl_enum_flag, reflect, reflect_enum, to_string, EnumSet, KlError};
use serde::{Deserialize, Serialize};

reflect_enum! {
    #[derive(Debug)]
    pub enum AccessMode {
        ReadWrite => "read_write",
        WriteOnly => "write_only",
        ReadOnly => "read_only",
        Max => "max",
    }
}

reflect_enum! {
    #[derive(Debug, PartialOrd, Ord)]
    #[repr(u8)]
    pub enum TypeQualifier {
        Plain = 0 => "none",
        Const = 1 << 0 => "const",
        Restrict = 1 << 1 => "restrict",
        Volatile = 1 << 2 => "volatile",
    }
}

impl_enum_flag!(TypeQualifier: u8);

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Declaration {
    name: String,
    mode: AccessMode,
    qualifiers: EnumSet<TypeQualifier>,
}

#[test]
fn test_round_trip_every_enumerator() {
    for mode in reflect::<AccessMode>().values() {
        assert_eq!(from_string::<AccessMode>(to_string(mode)), Some(mode));
    }
    for qualifier in reflect::<TypeQualifier>().values() {
        assert_eq!(qualifier.to_string().parse::<TypeQualifier>().ok(), Some(qualifier));
    }
}

#[test]
fn test_unknown_names_yield_absence() {
    assert_eq!(from_string::<AccessMode>("read_writ"), None);
    assert_eq!(from_string::<AccessMode>(""), None);
    assert_eq!(from_string::<AccessMode>("ReadWrite"), None);

    let err = "mutable".parse::<TypeQualifier>().unwrap_err();
    assert!(matches!(err, KlError::InvalidEnumValue { enum_name: "TypeQualifier", .. }));
}

#[test]
fn test_discriminants_and_names() {
    let reflector = reflect::<TypeQualifier>();
    assert_eq!(reflector.count(), 4);
    assert_eq!(reflector.name(), "TypeQualifier");
    assert_eq!(TypeQualifier::Volatile as u8, 4);
    assert_eq!(reflector.to_string(TypeQualifier::Restrict), "restrict");
    assert!(TypeQualifier::Const < TypeQualifier::Volatile);
}

#[test]
fn test_json_by_name() -> Result<()> {
    let decl = Declaration {
        name: "ptr".to_string(),
        mode: AccessMode::ReadOnly,
        qualifiers: EnumSet::from(TypeQualifier::Const) | TypeQualifier::Volatile,
    };

    let text = json::dump(&decl)?;
    assert_eq!(
        text,
        r#"{"name":"ptr","mode":"read_only","qualifiers":["const","volatile"]}"#
    );

    let back: Declaration = json::from_str(&text)?;
    assert_eq!(back, decl);
    Ok(())
}

#[test]
fn test_json_rejects_unknown_enum_value() {
    let err = json::from_str::<Declaration>(r#"{"name":"p","mode":"append","qualifiers":[]}"#).unwrap_err();
    match err {
        KlError::Deserialize { type_name, message } => {
            assert!(type_name.ends_with("Declaration"));
            assert!(message.contains("invalid enum value: append"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_yaml_by_name() -> Result<()> {

    let decl = Declaration {
        name: "flags".to_string(),
        mode: AccessMode::Max,
        qualifiers: EnumSet::new(),
    };

    let text = yaml::dump(&decl)?;
    assert!(text.contains("mode: max"));

    let back: Declaration = yaml::from_str(&text)?;
    assert_eq!(back, decl);
    Ok(())
}
