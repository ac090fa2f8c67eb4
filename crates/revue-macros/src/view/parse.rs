use syn::{Data, DeriveInput, Fields, Ident, Type, Variant, Visibility};

//
// ============================================================================
// parse — case enumeration and payload classification only
// ============================================================================
//

//
// PayloadShape
//
// Classification of one case's associated data, computed from the complete
// field list. `Opaque` is never an error: those cases simply render nothing.
//

#[derive(Clone, Debug)]
pub enum PayloadShape {
    /// No fields at all (unit variant or empty parens).
    None,
    /// Exactly one unnamed field whose type is a bare, argument-free
    /// identifier. The identifier is the feature type name.
    Feature(Ident),
    /// Anything else: multiple fields, named fields, or a compound type
    /// (generic, tuple, reference, qualified path, ...).
    Opaque,
}

//
// CasePattern
//
// How the mirrored state variant must be matched in the generated dispatch.
//

#[derive(Clone, Copy, Debug)]
pub enum CasePattern {
    Unit,
    Tuple,
    Struct,
}

//
// CaseSpec
//

#[derive(Clone, Debug)]
pub struct CaseSpec {
    pub ident: Ident,
    pub pattern: CasePattern,
    pub payload: PayloadShape,
}

//
// EnumSpec
//

#[derive(Clone, Debug)]
pub struct EnumSpec {
    pub vis: Visibility,
    pub ident: Ident,
    pub cases: Vec<CaseSpec>,
}

/// Flatten the enum into an ordered case list. Source order is preserved:
/// it determines the order of arms in the generated dispatch.
pub fn parse_enum(input: &DeriveInput) -> syn::Result<EnumSpec> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ReducerView can only be derived for enums",
        ));
    };

    let cases = data.variants.iter().map(parse_case).collect();

    Ok(EnumSpec {
        vis: input.vis.clone(),
        ident: input.ident.clone(),
        cases,
    })
}

//
// ---------------------------------------------------------------------------
// Case helpers
// ---------------------------------------------------------------------------
//

fn parse_case(variant: &Variant) -> CaseSpec {
    CaseSpec {
        ident: variant.ident.clone(),
        pattern: case_pattern(&variant.fields),
        payload: classify_payload(&variant.fields),
    }
}

const fn case_pattern(fields: &Fields) -> CasePattern {
    match fields {
        Fields::Unit => CasePattern::Unit,
        Fields::Unnamed(_) => CasePattern::Tuple,
        Fields::Named(_) => CasePattern::Struct,
    }
}

fn classify_payload(fields: &Fields) -> PayloadShape {
    match fields {
        Fields::Unit => PayloadShape::None,
        Fields::Unnamed(unnamed) if unnamed.unnamed.is_empty() => PayloadShape::None,
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
            match feature_ident(&unnamed.unnamed[0].ty) {
                Some(ident) => PayloadShape::Feature(ident),
                None => PayloadShape::Opaque,
            }
        }
        Fields::Unnamed(_) | Fields::Named(_) => PayloadShape::Opaque,
    }
}

/// A payload type participates in view delegation only if it is a simple
/// named type: a single path segment with no qualifier and no arguments.
fn feature_ident(ty: &Type) -> Option<Ident> {
    let Type::Path(ty) = ty else {
        return None;
    };

    if ty.qself.is_some() {
        return None;
    }

    ty.path.get_ident().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn cases(input: DeriveInput) -> Vec<CaseSpec> {
        parse_enum(&input).expect("enum spec").cases
    }

    #[test]
    fn rejects_non_enum_input() {
        let input: DeriveInput = parse_quote!(
            struct Sheet {
                store: u8,
            }
        );
        let err = parse_enum(&input).unwrap_err();
        assert!(err.to_string().contains("can only be derived for enums"));
    }

    #[test]
    fn preserves_case_order() {
        let input: DeriveInput = parse_quote!(
            enum Sheet {
                Gamma,
                Alpha,
                Beta(Widget),
            }
        );
        let names: Vec<String> = cases(input).iter().map(|c| c.ident.to_string()).collect();
        assert_eq!(names, ["Gamma", "Alpha", "Beta"]);
    }

    #[test]
    fn unit_case_has_no_payload() {
        let input: DeriveInput = parse_quote!(
            enum Sheet {
                Alpha,
            }
        );
        let case = &cases(input)[0];
        assert!(matches!(case.pattern, CasePattern::Unit));
        assert!(matches!(case.payload, PayloadShape::None));
    }

    #[test]
    fn empty_parens_count_as_no_payload() {
        let input: DeriveInput = parse_quote!(
            enum Sheet {
                Alpha(),
            }
        );
        let case = &cases(input)[0];
        assert!(matches!(case.pattern, CasePattern::Tuple));
        assert!(matches!(case.payload, PayloadShape::None));
    }

    #[test]
    fn simple_named_payload_is_a_feature() {
        let input: DeriveInput = parse_quote!(
            enum Sheet {
                Beta(Widget),
            }
        );
        let PayloadShape::Feature(ident) = &cases(input)[0].payload else {
            panic!("expected feature payload");
        };
        assert_eq!(ident, "Widget");
    }

    #[test]
    fn compound_payloads_are_opaque() {
        let input: DeriveInput = parse_quote!(
            enum Sheet {
                Generic(Vec<u8>),
                Tuple((u8, u8)),
                Reference(&'static str),
                Qualified(widgets::Widget),
                Pair(Widget, Widget),
                Named { widget: Widget },
            }
        );
        for case in cases(input) {
            assert!(
                matches!(case.payload, PayloadShape::Opaque),
                "case {} should be opaque",
                case.ident
            );
        }
    }

    #[test]
    fn named_field_case_uses_struct_pattern() {
        let input: DeriveInput = parse_quote!(
            enum Sheet {
                Named { widget: Widget },
            }
        );
        assert!(matches!(cases(input)[0].pattern, CasePattern::Struct));
    }
}
