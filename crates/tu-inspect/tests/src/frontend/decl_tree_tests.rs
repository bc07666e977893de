use super::*;

fn parse(json: &str) -> Node {
    serde_json::from_str(json).expect("fixture deserializes")
}

#[test]
fn lowering_flattens_statement_layers() {
    // A function whose body declares a local and references it: the local
    // must become a child of the function, the reference must land in the
    // flat scan.
    let root = parse(
        r##"{
        "id": "0x1", "kind": "TranslationUnitDecl", "loc": {},
        "inner": [
            {
                "id": "0x2", "kind": "FunctionDecl",
                "loc": {"offset": 4, "file": "/tmp/t.c", "line": 1, "col": 5, "tokLen": 1},
                "name": "g",
                "inner": [
                    {
                        "id": "0x3", "kind": "ParmVarDecl",
                        "loc": {"offset": 10, "file": "/tmp/t.c", "line": 1, "col": 11, "tokLen": 1},
                        "name": "n"
                    },
                    {
                        "id": "0x4", "kind": "CompoundStmt",
                        "inner": [
                            {
                                "id": "0x5", "kind": "DeclStmt",
                                "inner": [
                                    {
                                        "id": "0x6", "kind": "VarDecl",
                                        "loc": {"offset": 20, "file": "/tmp/t.c", "line": 2, "col": 7, "tokLen": 1},
                                        "name": "y"
                                    }
                                ]
                            },
                            {
                                "id": "0x7", "kind": "ReturnStmt",
                                "inner": [
                                    {
                                        "id": "0x8", "kind": "DeclRefExpr",
                                        "range": {
                                            "begin": {"offset": 30, "file": "/tmp/t.c", "line": 3, "col": 10, "tokLen": 1},
                                            "end": {"offset": 30, "file": "/tmp/t.c", "line": 3, "col": 10, "tokLen": 1}
                                        },
                                        "referencedDecl": {"id": "0x6", "kind": "VarDecl", "name": "y"}
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        ]
    }"##,
    );

    let (unit, refs) = lower(&root);
    assert_eq!(unit.kind, DeclKind::Container);
    assert_eq!(unit.children.len(), 1);

    let g = &unit.children[0];
    assert_eq!(g.kind, DeclKind::Function);
    assert_eq!(g.name, "g");
    let child_names: Vec<&str> = g.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(child_names, ["n", "y"]);
    assert!(g.children.iter().all(|c| c.kind == DeclKind::Variable));

    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].name, "y");
    assert_eq!(refs[0].loc.as_ref().map(|l| (l.line, l.col)), Some((3, 10)));
}

#[test]
fn declarations_prefer_the_spelling_location() {
    let root = parse(
        r##"{
        "id": "0x1", "kind": "TranslationUnitDecl", "loc": {},
        "inner": [
            {
                "id": "0x2", "kind": "VarDecl",
                "loc": {
                    "spellingLoc": {"offset": 5, "file": "/tmp/macros.h", "line": 2, "col": 9, "tokLen": 3},
                    "expansionLoc": {"offset": 50, "file": "/tmp/t.c", "line": 8, "col": 1, "tokLen": 3}
                },
                "name": "gen"
            }
        ]
    }"##,
    );

    let (unit, _) = lower(&root);
    let loc = unit.children[0].loc.as_ref().expect("location");
    assert_eq!(loc.file, "/tmp/macros.h");
    assert_eq!((loc.line, loc.col), (2, 9));
}

#[test]
fn synthesized_declarations_lower_to_no_location() {
    let root = parse(
        r##"{
        "id": "0x1", "kind": "TranslationUnitDecl", "loc": {},
        "inner": [
            {"id": "0x2", "kind": "TypedefDecl", "loc": {}, "isImplicit": true, "name": "__builtin_va_list"}
        ]
    }"##,
    );

    let (unit, _) = lower(&root);
    assert_eq!(unit.children[0].name, "__builtin_va_list");
    assert!(unit.children[0].loc.is_none());
}

#[test]
fn anonymous_entities_lower_with_empty_names() {
    let root = parse(
        r##"{
        "id": "0x1", "kind": "TranslationUnitDecl", "loc": {},
        "inner": [
            {
                "id": "0x2", "kind": "NamespaceDecl",
                "loc": {"offset": 0, "file": "/tmp/t.c", "line": 1, "col": 1, "tokLen": 9},
                "inner": [
                    {
                        "id": "0x3", "kind": "FunctionDecl",
                        "loc": {"offset": 20, "file": "/tmp/t.c", "line": 2, "col": 5, "tokLen": 6},
                        "name": "hidden"
                    }
                ]
            }
        ]
    }"##,
    );

    let (unit, _) = lower(&root);
    let ns = &unit.children[0];
    assert_eq!(ns.kind, DeclKind::Container);
    assert!(ns.name.is_empty());
    assert_eq!(ns.children[0].name, "hidden");
}

#[test]
fn references_without_a_target_name_are_dropped() {
    let root = parse(
        r##"{
        "id": "0x1", "kind": "TranslationUnitDecl", "loc": {},
        "inner": [
            {
                "id": "0x2", "kind": "DeclRefExpr",
                "range": {
                    "begin": {"offset": 0, "file": "/tmp/t.c", "line": 1, "col": 1, "tokLen": 1},
                    "end": {"offset": 0, "file": "/tmp/t.c", "line": 1, "col": 1, "tokLen": 1}
                }
            }
        ]
    }"##,
    );

    let (_, refs) = lower(&root);
    assert!(refs.is_empty());
}
