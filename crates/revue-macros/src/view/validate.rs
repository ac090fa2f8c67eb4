use syn::DeriveInput;

///
/// validate
///
/// Structural invariants only:
/// - no generic parameters (types, lifetimes, consts)
/// - no `where` clause
///
/// The derive names `FooState`, `FooAction` and `FooView` positionally, so
/// a generic reducer enum has no well-formed expansion. Rejecting it here
/// with a spanned error beats handing the user a broken companion type.
///

pub fn validate(input: &DeriveInput) -> syn::Result<()> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ReducerView does not support generic enums",
        ));
    }

    if let Some(where_clause) = &input.generics.where_clause {
        return Err(syn::Error::new_spanned(
            where_clause,
            "ReducerView does not support `where` clauses",
        ));
    }

    Ok(())
}
