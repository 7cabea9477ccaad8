//! Structural extraction: functions, classes, imports, and top-level
//! variables pulled from a parsed tree. These feed the "structure" section
//! of an analysis report and are siblings of the metrics record, not part
//! of it.

use crate::core::ast::{has_child_token, node_text};
use crate::core::{
    ClassInfo, ClassMethodInfo, ClassPropertyInfo, CodeStructure, FunctionInfo, FunctionKind,
    ImportInfo, ImportKind, ImportSpecifier, MethodKind, SourceLocation, VariableInfo,
    VariableKind,
};
use tree_sitter::Node;

pub fn extract_structure(root: Node, source: &str) -> CodeStructure {
    let mut structure = CodeStructure::default();
    visit(root, source, &mut structure);
    structure
}

fn visit(node: Node, source: &str, out: &mut CodeStructure) {
    match node.kind() {
        "function_declaration"
        | "generator_function_declaration"
        | "function_expression"
        | "generator_function"
        | "arrow_function"
        | "method_definition" => {
            // Class methods are reported under their class, not as
            // free-standing functions.
            let inside_class = node.kind() == "method_definition"
                && node.parent().is_some_and(|p| p.kind() == "class_body");
            if !inside_class {
                out.functions.push(extract_function(node, source));
            }
        }
        "class_declaration" | "class" => {
            out.classes.push(extract_class(node, source));
        }
        "import_statement" => {
            out.imports.push(extract_static_import(node, source));
        }
        "call_expression" => {
            if let Some(import) = extract_call_import(node, source) {
                out.imports.push(import);
            }
        }
        "lexical_declaration" | "variable_declaration" => {
            if is_top_level(node) {
                extract_variables(node, source, &mut out.variables);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, out);
    }
}

fn is_top_level(node: Node) -> bool {
    node.parent().is_some_and(|p| {
        p.kind() == "program"
            || (p.kind() == "export_statement"
                && p.parent().is_some_and(|gp| gp.kind() == "program"))
    })
}

fn location_of(node: Node) -> SourceLocation {
    SourceLocation {
        line: node.start_position().row + 1,
        column: node.start_position().column,
        end_line: node.end_position().row + 1,
    }
}

fn extract_function(node: Node, source: &str) -> FunctionInfo {
    let kind = match node.kind() {
        "function_declaration" | "generator_function_declaration" => FunctionKind::Declaration,
        "arrow_function" => FunctionKind::Arrow,
        "method_definition" => FunctionKind::Method,
        _ => FunctionKind::Expression,
    };

    FunctionInfo {
        name: function_name(node, source),
        kind,
        parameter_count: parameter_count(node),
        is_async: has_child_token(node, "async"),
        is_generator: node.kind().starts_with("generator_") || has_child_token(node, "*"),
        max_nesting_depth: max_nesting(node, 0),
        line_count: node.end_position().row - node.start_position().row + 1,
        location: location_of(node),
    }
}

fn function_name(node: Node, source: &str) -> String {
    if let Some(name) = node.child_by_field_name("name") {
        return node_text(name, source).to_string();
    }

    // Anonymous functions inherit a name from the binding or property
    // they are assigned to, when one exists.
    if let Some(parent) = node.parent() {
        match parent.kind() {
            "variable_declarator" => {
                if let Some(name) = parent.child_by_field_name("name") {
                    return node_text(name, source).to_string();
                }
            }
            "assignment_expression" => {
                if let Some(left) = parent.child_by_field_name("left") {
                    return node_text(left, source).to_string();
                }
            }
            "pair" => {
                if let Some(key) = parent.child_by_field_name("key") {
                    return node_text(key, source).to_string();
                }
            }
            _ => {}
        }
    }

    "anonymous".to_string()
}

fn parameter_count(node: Node) -> usize {
    if let Some(params) = node.child_by_field_name("parameters") {
        return params.named_child_count();
    }
    // Arrow functions with a single bare parameter: `x => x * 2`
    if node.child_by_field_name("parameter").is_some() {
        return 1;
    }
    0
}

fn max_nesting(node: Node, current_depth: u32) -> u32 {
    let new_depth = match node.kind() {
        "if_statement" | "while_statement" | "do_statement" | "for_statement"
        | "for_in_statement" | "switch_statement" | "try_statement" | "catch_clause" => {
            current_depth + 1
        }
        _ => current_depth,
    };

    let mut max_depth = new_depth;
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        max_depth = max_depth.max(max_nesting(child, new_depth));
    }
    max_depth
}

fn extract_class(node: Node, source: &str) -> ClassInfo {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let superclass_name = superclass_of(node, source);

    let mut methods = Vec::new();
    let mut properties = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "method_definition" => methods.push(extract_method(member, source)),
                "field_definition" | "public_field_definition" => {
                    if let Some(prop) = member.child_by_field_name("property") {
                        properties.push(ClassPropertyInfo {
                            name: node_text(prop, source).to_string(),
                            is_static: has_child_token(member, "static"),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    ClassInfo {
        name,
        superclass_name,
        methods,
        properties,
        location: location_of(node),
    }
}

fn superclass_of(node: Node, source: &str) -> Option<String> {
    let heritage = {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|c| c.kind() == "class_heritage")?;
        found
    };
    // JS grammar: class_heritage -> "extends" expression.
    // TS grammar: class_heritage -> extends_clause -> value.
    let target = heritage.named_child(0)?;
    let value = if target.kind() == "extends_clause" {
        target.named_child(0)?
    } else {
        target
    };
    Some(node_text(value, source).to_string())
}

fn extract_method(node: Node, source: &str) -> ClassMethodInfo {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let kind = if name == "constructor" {
        MethodKind::Constructor
    } else if has_child_token(node, "get") {
        MethodKind::Getter
    } else if has_child_token(node, "set") {
        MethodKind::Setter
    } else {
        MethodKind::Method
    };

    ClassMethodInfo {
        name,
        kind,
        is_static: has_child_token(node, "static"),
        is_async: has_child_token(node, "async"),
    }
}

fn string_value(node: Node, source: &str) -> String {
    node_text(node, source)
        .trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string()
}

fn extract_static_import(node: Node, source: &str) -> ImportInfo {
    let source_module = node
        .child_by_field_name("source")
        .map(|s| string_value(s, source))
        .unwrap_or_default();

    let mut specifiers = Vec::new();
    let mut cursor = node.walk();
    if let Some(clause) = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "import_clause")
    {
        let mut clause_cursor = clause.walk();
        for child in clause.named_children(&mut clause_cursor) {
            match child.kind() {
                "identifier" => specifiers.push(ImportSpecifier {
                    imported_name: "default".to_string(),
                    local_alias: node_text(child, source).to_string(),
                }),
                "namespace_import" => {
                    let mut ns_cursor = child.walk();
                    let local = child
                        .named_children(&mut ns_cursor)
                        .find(|c| c.kind() == "identifier");
                    if let Some(local) = local {
                        specifiers.push(ImportSpecifier {
                            imported_name: "*".to_string(),
                            local_alias: node_text(local, source).to_string(),
                        });
                    }
                }
                "named_imports" => {
                    let mut named_cursor = child.walk();
                    for spec in child.named_children(&mut named_cursor) {
                        if spec.kind() != "import_specifier" {
                            continue;
                        }
                        let imported = spec
                            .child_by_field_name("name")
                            .map(|n| node_text(n, source).to_string())
                            .unwrap_or_default();
                        let local = spec
                            .child_by_field_name("alias")
                            .map(|a| node_text(a, source).to_string())
                            .unwrap_or_else(|| imported.clone());
                        specifiers.push(ImportSpecifier {
                            imported_name: imported,
                            local_alias: local,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    ImportInfo {
        source_module,
        import_kind: ImportKind::Static,
        specifiers,
    }
}

/// `import("mod")` and `require("mod")` calls with a literal module name.
fn extract_call_import(node: Node, source: &str) -> Option<ImportInfo> {
    let callee = node.child_by_field_name("function")?;
    let import_kind = match callee.kind() {
        "import" => ImportKind::Dynamic,
        "identifier" if node_text(callee, source) == "require" => ImportKind::Commonjs,
        _ => return None,
    };

    let args = node.child_by_field_name("arguments")?;
    let first = args.named_child(0)?;
    if first.kind() != "string" {
        return None;
    }

    Some(ImportInfo {
        source_module: string_value(first, source),
        import_kind,
        specifiers: Vec::new(),
    })
}

fn extract_variables(node: Node, source: &str, out: &mut Vec<VariableInfo>) {
    let kind = match node.child(0).map(|c| c.kind()) {
        Some("const") => VariableKind::Const,
        Some("var") => VariableKind::Var,
        _ => VariableKind::Let,
    };

    let mut cursor = node.walk();
    for declarator in node.named_children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        if let Some(name) = declarator.child_by_field_name("name") {
            out.push(VariableInfo {
                name: node_text(name, source).to_string(),
                kind,
                location: location_of(declarator),
            });
        }
    }
}
