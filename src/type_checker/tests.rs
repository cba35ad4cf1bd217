//! Unit tests for the type checker module.
//!
//! - Assignment compatibility
//! - Scoped symbol table
//! - Declaration collection and its rejections
//! - Type derivation and the shape of the proof tree

use std::rc::Rc;

use crate::{
    ast::declarations::CompilationUnit,
    check_source,
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parser::parser::parse,
    Position,
};

use super::{
    obligation::{ProofObligation, TypeCheckResult},
    symbol_table::{DeclarationTable, SymbolTable},
    symbol_table_builder::build_symbol_table,
    type_checker::type_check,
    types::{is_assignment_compatible, is_primitive, TypeTag},
};

fn parse_source(source: &str) -> CompilationUnit {
    let tokens = tokenize(source.to_string(), Some("C.java".to_string())).unwrap();
    parse(tokens, Rc::new("C.java".to_string())).unwrap()
}

fn collect(source: &str) -> Result<DeclarationTable, Error> {
    build_symbol_table(&parse_source(source))
}

fn check(source: &str) -> TypeCheckResult {
    check_source(source, "C.java").unwrap().1
}

fn reference(name: &str) -> TypeTag {
    TypeTag::Reference(name.to_string())
}

fn all_tags() -> Vec<TypeTag> {
    vec![
        TypeTag::Int,
        TypeTag::Bool,
        TypeTag::Void,
        TypeTag::NullType,
        TypeTag::Error,
        reference("A"),
        reference("B"),
    ]
}

fn labels(obligation: &ProofObligation) -> Vec<&str> {
    obligation.children().iter().map(ProofObligation::label).collect()
}

// COMPATIBILITY

#[test]
fn test_type_tag_display() {
    assert_eq!(TypeTag::Int.to_string(), "int");
    assert_eq!(TypeTag::Bool.to_string(), "boolean");
    assert_eq!(TypeTag::Void.to_string(), "void");
    assert_eq!(TypeTag::NullType.to_string(), "nullType");
    assert_eq!(TypeTag::Error.to_string(), "ERROR");
    assert_eq!(reference("Point").to_string(), "Point");
}

#[test]
fn test_is_primitive() {
    assert!(is_primitive(&TypeTag::Int));
    assert!(is_primitive(&TypeTag::Bool));
    assert!(!is_primitive(&TypeTag::Void));
    assert!(!is_primitive(&TypeTag::NullType));
    assert!(!is_primitive(&TypeTag::Error));
    assert!(!is_primitive(&reference("A")));
}

#[test]
fn test_compatible_with_itself() {
    for tag in all_tags() {
        let expected = !matches!(tag, TypeTag::NullType | TypeTag::Void | TypeTag::Error);
        assert_eq!(is_assignment_compatible(&tag, &tag), expected, "{} := {}", tag, tag);
    }
}

#[test]
fn test_error_is_never_compatible() {
    for tag in all_tags() {
        assert!(!is_assignment_compatible(&TypeTag::Error, &tag));
        assert!(!is_assignment_compatible(&tag, &TypeTag::Error));
    }
}

#[test]
fn test_null_only_fits_references() {
    assert!(is_assignment_compatible(&reference("A"), &TypeTag::NullType));
    assert!(!is_assignment_compatible(&TypeTag::Int, &TypeTag::NullType));
    assert!(!is_assignment_compatible(&TypeTag::Bool, &TypeTag::NullType));
    assert!(!is_assignment_compatible(&TypeTag::Void, &TypeTag::NullType));
    assert!(!is_assignment_compatible(&TypeTag::NullType, &TypeTag::NullType));
}

#[test]
fn test_no_other_coercion() {
    assert!(!is_assignment_compatible(&TypeTag::Int, &TypeTag::Bool));
    assert!(!is_assignment_compatible(&TypeTag::Bool, &TypeTag::Int));
    assert!(!is_assignment_compatible(&reference("A"), &reference("B")));
    assert!(!is_assignment_compatible(&TypeTag::Int, &reference("A")));
    assert!(!is_assignment_compatible(&reference("A"), &TypeTag::Int));
    assert!(!is_assignment_compatible(&TypeTag::NullType, &reference("A")));
    assert!(!is_assignment_compatible(&TypeTag::Void, &TypeTag::Void));
}

// SYMBOL TABLE

#[test]
fn test_scopes_bind_and_unbind_locals() {
    let globals = collect("class C { int i; }").unwrap();
    let mut table = SymbolTable::new(&globals);

    table.push_scope();
    table.add_local("i", TypeTag::Int, Position::null()).unwrap();
    table.add_local("j", reference("Integer"), Position::null()).unwrap();
    assert_eq!(table.get_type("i"), TypeTag::Int);
    assert_eq!(table.get_type("j"), reference("Integer"));

    table.push_scope();
    table.add_local("k", TypeTag::Bool, Position::null()).unwrap();
    assert_eq!(table.get_type("i"), TypeTag::Int);
    assert_eq!(table.get_type("k"), TypeTag::Bool);
    table.pop_scope();

    assert_eq!(table.get_type("k"), TypeTag::Error);
    assert_eq!(table.get_type("i"), TypeTag::Int);
    table.pop_scope();

    assert_eq!(table.depth(), 0);
    assert_eq!(table.get_type("i"), TypeTag::Error);
    assert_eq!(table.get_type("j"), TypeTag::Error);
    assert_eq!(table.get_type("C.i"), TypeTag::Int);
}

#[test]
fn test_add_local_rejects_duplicates() {
    let globals = DeclarationTable::default();
    let mut table = SymbolTable::new(&globals);

    table.push_scope();
    table.add_local("i", TypeTag::Int, Position::null()).unwrap();
    let error = table.add_local("i", reference("Integer"), Position::null()).unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::VariableAlreadyDeclared {
            variable: "i".to_string(),
            type_: "int".to_string(),
        }
    );
}

#[test]
fn test_add_local_rejects_outer_and_global_names() {
    let globals = collect("class C { int i; }").unwrap();
    let mut table = SymbolTable::new(&globals);

    table.push_scope();
    table.add_local("a", TypeTag::Bool, Position::null()).unwrap();
    table.push_scope();

    assert!(table.add_local("a", TypeTag::Int, Position::null()).is_err());
    assert!(table.add_local("C.i", TypeTag::Int, Position::null()).is_err());
    assert!(table.add_local("i", TypeTag::Int, Position::null()).is_ok());
}

#[test]
fn test_add_local_allows_a_name_again_after_its_scope_is_gone() {
    let globals = DeclarationTable::default();
    let mut table = SymbolTable::new(&globals);

    table.push_scope();
    table.push_scope();
    table.add_local("i", TypeTag::Int, Position::null()).unwrap();
    table.pop_scope();

    assert!(table.add_local("i", TypeTag::Bool, Position::null()).is_ok());
    assert_eq!(table.get_type("i"), TypeTag::Bool);
}

#[test]
fn test_add_local_needs_an_open_scope() {
    let globals = DeclarationTable::default();
    let mut table = SymbolTable::new(&globals);

    let error = table.add_local("i", TypeTag::Int, Position::null()).unwrap_err();

    assert_eq!(*error.get_impl(), ErrorImpl::NoActiveScope { variable: "i".to_string() });
    assert_eq!(table.depth(), 0);
    assert_eq!(table.get_type("i"), TypeTag::Error);
}

// DECLARATION COLLECTION

#[test]
fn test_collect_fields() {
    let table = collect("class C { int i; private int j; public C k; protected Integer m = null; }").unwrap();

    assert_eq!(table.get_type("C.i"), Some(&TypeTag::Int));
    assert_eq!(table.get_type("C.j"), Some(&TypeTag::Int));
    assert_eq!(table.get_type("C.k"), Some(&reference("C")));
    assert_eq!(table.get_type("C.m"), Some(&reference("Integer")));
    assert_eq!(table.get_type("i"), None);
}

#[test]
fn test_collect_parameter_lists() {
    let table = collect("class C { void m(int i, Integer j) {} int n() {} boolean o(); }").unwrap();

    assert_eq!(table.get_type("C.m"), Some(&TypeTag::Void));
    assert_eq!(
        table.get_parameter_type_list("C.m").unwrap(),
        &[("i".to_string(), TypeTag::Int), ("j".to_string(), reference("Integer"))]
    );
    assert_eq!(table.get_type("C.n"), Some(&TypeTag::Int));
    assert!(table.get_parameter_type_list("C.n").unwrap().is_empty());
    assert_eq!(table.get_type("C.o"), Some(&TypeTag::Bool));
    assert!(table.get_parameter_type_list("C.p").is_none());
}

#[test]
fn test_collect_ignores_package() {
    let table = collect("package a.b; class C { int i; }").unwrap();

    assert_eq!(table.get_type("C.i"), Some(&TypeTag::Int));
}

#[test]
fn test_collect_rejects_imports() {
    let error = collect("import java.util.List; class C {}").unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::ImportNotAllowed {
            import: "java.util.List".to_string()
        }
    );
}

#[test]
fn test_collect_rejects_two_classes() {
    let error = collect("class C {} class D {}").unwrap_err();

    assert_eq!(*error.get_impl(), ErrorImpl::MultipleTypeDeclarations { count: 2 });
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_collect_rejects_inner_class() {
    let error = collect("class C { class D {} }").unwrap_err();

    assert_eq!(*error.get_impl(), ErrorImpl::NestedTypeDeclaration { class: "C".to_string() });
}

#[test]
fn test_collect_rejects_multiple_fragments() {
    let error = collect("class C { int i, j; }").unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::MultipleFragments {
            names: vec!["i".to_string(), "j".to_string()]
        }
    );
}

#[test]
fn test_collect_rejects_qualified_type_names() {
    let error = collect("class C { java.lang.Integer i; }").unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::TypeNameNotSimple {
            type_: "java.lang.Integer".to_string()
        }
    );
}

#[test]
fn test_collect_rejects_other_primitives() {
    for source in [
        "class C { double d; }",
        "class C { long m() {} }",
        "class C { void m(char c) {} }",
        "class C { void v; }",
    ] {
        let error = collect(source).unwrap_err();
        assert_eq!(error.get_error_name(), "UnsupportedPrimitiveType", "{}", source);
    }
}

#[test]
fn test_collect_rejects_arrays() {
    let error = collect("class C { int[] a; }").unwrap_err();

    assert_eq!(*error.get_impl(), ErrorImpl::UnsupportedType { type_: "int[]".to_string() });
}

#[test]
fn test_collect_rejects_modifiers() {
    for (source, modifier) in [
        ("static class C {}", "static"),
        ("public final class C {}", "final"),
        ("class C { static int i; }", "static"),
        ("class C { public abstract void m(); }", "abstract"),
    ] {
        let error = collect(source).unwrap_err();
        assert_eq!(
            *error.get_impl(),
            ErrorImpl::UnsupportedModifier {
                modifier: modifier.to_string()
            }
        );
    }
}

#[test]
fn test_collect_rejects_overloads() {
    let error = collect("class C { void m(int i) {} void m(boolean b) {} }").unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::MemberAlreadyDeclared {
            name: "C.m".to_string(),
            type_: "void".to_string()
        }
    );
}

#[test]
fn test_collect_rejects_method_named_like_field() {
    let error = collect("class C { int m; boolean m() {} }").unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::MemberAlreadyDeclared {
            name: "C.m".to_string(),
            type_: "int".to_string()
        }
    );
}

// TYPE DERIVATION

#[test]
fn test_fields_only_class_is_well_typed() {
    let (table, result) = check_source("class C { int i; }", "C.java").unwrap();

    assert_eq!(table.get_type("C.i"), Some(&TypeTag::Int));
    assert!(result.well_typed);
    assert_eq!(result.root.label(), "CompilationUnit : void");

    let class = &result.root.children()[0];
    assert_eq!(class.label(), "class C : void");
    assert_eq!(labels(class), vec!["true"]);
}

#[test]
fn test_empty_method_is_well_typed() {
    let (table, result) = check_source("class C { int n() { } }", "C.java").unwrap();

    assert_eq!(table.get_type("C.n"), Some(&TypeTag::Int));
    assert!(table.get_parameter_type_list("C.n").unwrap().is_empty());
    assert!(result.well_typed);

    let method = result.root.child("class C : void").unwrap().child("method C.n : void").unwrap();
    let block = method.child("B0 : void").unwrap();
    assert_eq!(labels(block), vec!["true"]);
}

#[test]
fn test_hex_and_underscored_literals_are_int() {
    let result = check("class C { void m() { int i = 0x10; int j = 1_000; } }");

    assert!(result.well_typed);
    let block = &result.root.children()[0].children()[0].children()[0];
    assert_eq!(labels(&block.children()[0]), vec!["i : int", "0x10 : int", "int := int"]);
    assert_eq!(labels(&block.children()[0].children()[1]), vec!["E(0x10) = int"]);
    assert_eq!(labels(&block.children()[1]), vec!["j : int", "1_000 : int", "int := int"]);
    assert_eq!(labels(&block.children()[1].children()[1]), vec!["E(1_000) = int"]);
}

#[test]
fn test_declarations_and_literals() {
    let result = check("class C { void m() { int i = 1; boolean b = true; C c = null; C d; } }");

    assert!(result.well_typed);
    assert!(result.root.failing_leaves().is_empty());

    let block = &result.root.children()[0].children()[0].children()[0];
    assert_eq!(block.label(), "B0 : void");
    assert_eq!(labels(block), vec!["S0 : void", "S1 : void", "S2 : void", "S3 : void"]);

    assert_eq!(labels(&block.children()[0]), vec!["i : int", "1 : int", "int := int"]);
    assert_eq!(labels(&block.children()[0].children()[1]), vec!["E(1) = int"]);
    assert_eq!(labels(&block.children()[1]), vec!["b : boolean", "true : boolean", "boolean := boolean"]);
    assert_eq!(labels(&block.children()[2]), vec!["c : C", "null : nullType", "C := nullType"]);
    assert_eq!(labels(&block.children()[3]), vec!["d : C"]);
    assert_eq!(labels(&block.children()[3].children()[0]), vec!["E(d) = C"]);
}

#[test]
fn test_parameters_and_this_are_in_scope() {
    let result = check("class C { boolean m(int a, C b) { int x = a; C y = b; C z = this; } }");

    assert!(result.well_typed, "{}", result.root);
}

#[test]
fn test_reference_initializer_into_primitive_fails_once() {
    let result = check("class C { void m(A a) { int i = a; } }");

    assert!(!result.well_typed);

    let failing = result.root.failing_leaves();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].label(), "int := A");

    let class = &result.root.children()[0];
    let method = &class.children()[0];
    let block = &method.children()[0];
    let statement = &block.children()[0];
    assert_eq!(result.root.label(), "CompilationUnit : ERROR");
    assert_eq!(class.label(), "class C : ERROR");
    assert_eq!(method.label(), "method C.m : ERROR");
    assert_eq!(block.label(), "B0 : ERROR");
    assert_eq!(statement.label(), "S0 : ERROR");
    assert_eq!(labels(statement), vec!["i : int", "a : A", "int := A"]);
}

#[test]
fn test_null_into_primitive_fails() {
    let result = check("class C { void m() { int i = null; } }");

    assert!(!result.well_typed);
    assert_eq!(result.root.failing_leaves().len(), 1);
    assert_eq!(result.root.failing_leaves()[0].label(), "int := nullType");
}

#[test]
fn test_redeclaration_is_fatal() {
    let error = check_source("class C { void m() { int i; int i; } }", "C.java").unwrap_err();

    assert_eq!(
        *error.get_impl(),
        ErrorImpl::VariableAlreadyDeclared {
            variable: "i".to_string(),
            type_: "int".to_string()
        }
    );
    assert_eq!(error.get_position().0, 28);
}

#[test]
fn test_shadowing_outer_local_or_parameter_is_fatal() {
    assert!(check_source("class C { void m() { int i; { boolean i; } } }", "C.java").is_err());
    assert!(check_source("class C { void m(int a) { int a; } }", "C.java").is_err());
    assert!(check_source("class C { void m(int a, boolean a) { } }", "C.java").is_err());
    assert!(check_source("class C { void m() { C this; } }", "C.java").is_err());
}

#[test]
fn test_sibling_blocks_may_reuse_names() {
    let result = check("class C { void m() { { int i; } { boolean i; } } }");

    assert!(result.well_typed);
}

#[test]
fn test_locals_do_not_leak_between_methods() {
    let result = check("class C { void m() { int i; } void n() { int j = i; } }");

    assert!(!result.well_typed);
    let labels: Vec<&str> = result.root.failing_leaves().iter().map(|leaf| leaf.label()).collect();
    assert_eq!(labels, vec!["E(i) = ERROR", "int := ERROR"]);
}

#[test]
fn test_undeclared_name_does_not_abort() {
    let result = check("class C { void m() { C c = x; int j = 1; } void n() { } }");

    assert!(!result.well_typed);

    let class = &result.root.children()[0];
    assert_eq!(labels(class), vec!["method C.m : ERROR", "method C.n : void"]);

    let block = &class.children()[0].children()[0];
    assert_eq!(labels(block), vec!["S0 : ERROR", "S1 : void"]);
    assert_eq!(labels(&block.children()[0]), vec!["c : C", "x : ERROR", "C := ERROR"]);

    let lookup = &block.children()[0].children()[1].children()[0];
    assert_eq!(lookup.label(), "E(x) = ERROR");
    assert!(!lookup.holds());
}

#[test]
fn test_fields_are_not_simple_names() {
    let result = check("class C { int f; void m() { int i = f; } }");

    assert!(!result.well_typed);
    assert_eq!(result.root.failing_leaves()[0].label(), "E(f) = ERROR");
}

#[test]
fn test_blocks_and_statements_numbered_in_completion_order() {
    let result = check("class C { void m() { { int a; } int b; { } } void n() { int c; } }");

    let class = &result.root.children()[0];
    let outer = &class.children()[0].children()[0];
    assert_eq!(outer.label(), "B2 : void");
    assert_eq!(labels(outer), vec!["B0 : void", "S1 : void", "B1 : void"]);
    assert_eq!(labels(&outer.children()[0]), vec!["S0 : void"]);

    let other = &class.children()[1].children()[0];
    assert_eq!(other.label(), "B0 : void");
    assert_eq!(labels(other), vec!["S0 : void"]);
}

#[test]
fn test_methods_without_body_are_skipped() {
    let result = check("class C { void m(); int n() { } }");

    assert!(result.well_typed);
    assert_eq!(labels(&result.root.children()[0]), vec!["method C.n : void"]);
}

#[test]
fn test_local_type_rules_match_fields() {
    let error = check_source("class C { void m() { java.lang.Integer i; } }", "C.java").unwrap_err();
    assert_eq!(error.get_error_name(), "TypeNameNotSimple");

    let error = check_source("class C { void m() { double d; } }", "C.java").unwrap_err();
    assert_eq!(error.get_error_name(), "UnsupportedPrimitiveType");

    let error = check_source("class C { void m() { int i = 1, j; } }", "C.java").unwrap_err();
    assert_eq!(error.get_error_name(), "MultipleFragments");
}

#[test]
fn test_type_check_without_collected_method_fails() {
    let unit = parse_source("class C { void m() { } }");
    let error = type_check(&DeclarationTable::default(), &unit).unwrap_err();

    assert_eq!(*error.get_impl(), ErrorImpl::MethodNotDeclared { method: "C.m".to_string() });
}

#[test]
fn test_declaration_table_can_be_shared() {
    let unit = parse_source("class C { void m(A a) { int i = a; } }");
    let table = build_symbol_table(&unit).unwrap();

    let first = type_check(&table, &unit).unwrap();
    let second = type_check(&table, &unit).unwrap();

    assert_eq!(first, second);
}

// REPORT

#[test]
fn test_obligation_display() {
    let result = check("class C { void m() { int i = 1; } }");

    let expected = "\
[ok]   CompilationUnit : void
  [ok]   class C : void
    [ok]   method C.m : void
      [ok]   B0 : void
        [ok]   S0 : void
          [ok]   i : int
            [ok]   E(i) = int
          [ok]   1 : int
            [ok]   E(1) = int
          [ok]   int := int
";
    assert_eq!(result.root.to_string(), expected);
}

#[test]
fn test_obligation_display_marks_failures() {
    let result = check("class C { void m() { boolean b = 1; } }");
    let rendered = result.root.to_string();

    assert!(rendered.starts_with("[FAIL] CompilationUnit : ERROR\n"));
    assert!(rendered.contains("[FAIL] boolean := int\n"));
    assert!(rendered.contains("[ok]   E(b) = boolean\n"));
}

#[test]
fn test_obligation_json() {
    let result = check("class C { }");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["well_typed"], true);
    assert_eq!(json["root"]["kind"], "group");
    assert_eq!(json["root"]["label"], "CompilationUnit : void");
    assert_eq!(json["root"]["children"][0]["children"][0]["kind"], "leaf");
    assert_eq!(json["root"]["children"][0]["children"][0]["label"], "true");
    assert_eq!(json["root"]["children"][0]["children"][0]["holds"], true);
}

#[test]
fn test_type_tag_serializes_as_name() {
    assert_eq!(serde_json::to_value(TypeTag::NullType).unwrap(), "nullType");
    assert_eq!(serde_json::to_value(reference("A")).unwrap(), "A");
}
