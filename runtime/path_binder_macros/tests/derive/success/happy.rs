use path_binder::{BindTarget, FieldKind};

#[derive(BindTarget)]
pub struct Plain {
    #[path_param(name = "id")]
    id: String,
    #[path_param]
    tags: Vec<String>,
    #[path_param(name = "labels")]
    labels: Option<Vec<String>>,
    untouched: u64,
}

#[derive(BindTarget)]
struct FullyQualified {
    #[path_param]
    id: ::std::string::String,
    #[path_param]
    tags: std::vec::Vec<std::string::String>,
    #[path_param]
    labels: std::option::Option<Vec<String>>,
}

#[derive(BindTarget)]
pub(crate) struct WithUnsupported {
    #[path_param]
    count: u32,
    #[path_param]
    ratio: Option<f64>,
}

#[derive(BindTarget)]
pub struct Empty {}

#[derive(BindTarget)]
pub struct RawNames {
    #[path_param]
    r#type: String,
}

#[derive(BindTarget)]
pub struct Documented {
    /// The identifier.
    #[path_param(name = "id")]
    #[allow(dead_code)]
    id: String,
}

fn main() {
    assert_eq!(Plain::FIELDS.len(), 3);
    assert_eq!(FullyQualified::FIELDS.len(), 3);
    assert_eq!(Empty::FIELDS.len(), 0);
    assert_eq!(Documented::FIELDS[0].param(), "id");
    assert!(matches!(
        WithUnsupported::FIELDS[0].kind(),
        FieldKind::Unsupported { type_name: "u32" }
    ));
    assert!(matches!(
        WithUnsupported::FIELDS[1].kind(),
        FieldKind::Unsupported { .. }
    ));
    assert_eq!(RawNames::FIELDS[0].name(), "type");
    assert_eq!(RawNames::FIELDS[0].param(), "type");

    let plain = Plain {
        id: String::new(),
        tags: vec![],
        labels: None,
        untouched: 0,
    };
    let _ = (plain.id, plain.tags, plain.labels, plain.untouched);
    let _ = WithUnsupported { count: 0, ratio: None };
    let _ = RawNames {
        r#type: String::new(),
    }
    .r#type;
    let _ = FullyQualified {
        id: String::new(),
        tags: vec![],
        labels: None,
    };
}
