use quote::ToTokens;
use rowshape_core::ElementKind;
use syn::{DeriveInput, LitStr, Path, parse::ParseBuffer};

pub(crate) struct ElementMetadata {
    pub(crate) kind: ElementKind,
    pub(crate) pattern: Option<Path>,
}

pub(crate) fn decode_element(item: &DeriveInput) -> ElementMetadata {
    let mut metadata = ElementMetadata {
        kind: ElementKind::Value,
        pattern: None,
    };
    for attr in &item.attrs {
        let meta = &attr.meta;
        if meta.path().is_ident("element") {
            let Ok(list) = meta.require_list() else {
                panic!(
                    "Error while parsing `element`, use it like: `#[element(attribute = value, ...)]`",
                );
            };
            let _ = list.parse_nested_meta(|arg| {
                if arg.path.is_ident("kind") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                        panic!("Error while parsing `kind`, use it like: `#[element(kind = \"column\")]`");
                    };
                    metadata.kind = match v.value().parse() {
                        Ok(kind) => kind,
                        Err(e) => panic!("{:#}", e),
                    };
                } else if arg.path.is_ident("pattern") {
                    let Ok(v) = arg.value().and_then(ParseBuffer::parse::<Path>) else {
                        panic!("Error while parsing `pattern`, use it like: `#[element(pattern = ColumnPattern)]`");
                    };
                    metadata.pattern = Some(v);
                } else {
                    panic!(
                        "Unknown attribute `{}` inside element macro",
                        arg.path.to_token_stream()
                    );
                }
                Ok(())
            });
        }
    }
    metadata
}

pub(crate) fn pattern_name(item: &DeriveInput) -> String {
    let ident = item.ident.to_string();
    let default_name = ident
        .strip_suffix("Pattern")
        .filter(|v| !v.is_empty())
        .unwrap_or(&ident)
        .to_string();
    item.attrs
        .iter()
        .find_map(|attr| {
            if attr.meta.path().is_ident("pattern_name") {
                let Ok(v) = attr
                    .meta
                    .require_list()
                    .and_then(|v| v.parse_args::<LitStr>())
                else {
                    panic!(
                        "Error while parsing `pattern_name`, use it like #[pattern_name(\"{}\")]",
                        &default_name
                    );
                };
                return Some(v.value());
            }
            None
        })
        .unwrap_or(default_name)
}
