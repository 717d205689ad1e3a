use ecamap_api::{
    Marker, MetadataError, MetadataResult, MethodMetadata, ModuleMetadata, RegistryEntry,
    TypeMetadata, TypeRef,
};
use ecamap_core::{DiagnosticSink, MetadataScanner, ScanConfig, ScanUnit};
use std::cell::RefCell;
use std::rc::Rc;

/// Method whose markers or parameters may fail to enumerate.
#[derive(Clone)]
struct Method {
    name: &'static str,
    parameters: Result<Vec<TypeRef>, &'static str>,
    markers: Result<Vec<Marker>, &'static str>,
}

impl Method {
    fn ok(name: &'static str, parameters: Vec<TypeRef>, markers: Vec<Marker>) -> Self {
        Self {
            name,
            parameters: Ok(parameters),
            markers: Ok(markers),
        }
    }
}

impl MethodMetadata for Method {
    fn name(&self) -> &str {
        self.name
    }

    fn parameter_types(&self) -> MetadataResult<Vec<TypeRef>> {
        self.parameters
            .clone()
            .map_err(|e| MetadataError::Malformed(e.to_string()))
    }

    fn markers(&self) -> MetadataResult<Vec<Marker>> {
        self.markers
            .clone()
            .map_err(|e| MetadataError::Malformed(e.to_string()))
    }
}

#[derive(Clone)]
struct Type {
    name: &'static str,
    methods: Result<Vec<Method>, &'static str>,
}

impl TypeMetadata for Type {
    fn full_name(&self) -> &str {
        self.name
    }

    fn methods(&self) -> MetadataResult<Vec<Box<dyn MethodMetadata + '_>>> {
        match &self.methods {
            Ok(methods) => Ok(methods
                .iter()
                .cloned()
                .map(|m| Box::new(m) as Box<dyn MethodMetadata + '_>)
                .collect()),
            Err(e) => Err(MetadataError::Malformed(e.to_string())),
        }
    }
}

struct Module {
    name: &'static str,
    types: Vec<Type>,
}

impl ModuleMetadata for Module {
    fn name(&self) -> &str {
        self.name
    }

    fn types(&self) -> MetadataResult<Vec<Box<dyn TypeMetadata + '_>>> {
        Ok(self
            .types
            .iter()
            .cloned()
            .map(|t| Box::new(t) as Box<dyn TypeMetadata + '_>)
            .collect())
    }
}

fn action() -> Marker {
    Marker::new("ActionAttribute")
}

fn collecting_sink() -> (DiagnosticSink, Rc<RefCell<Vec<String>>>) {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::clone(&lines);
    let sink = DiagnosticSink::new(move |line| captured.borrow_mut().push(line.to_string()));
    (sink, lines)
}

#[test]
fn test_type_and_method_failures_are_contained() {
    let module = Module {
        name: "Game",
        types: vec![
            Type {
                name: "Game.Broken",
                methods: Err("could not load base type"),
            },
            Type {
                name: "Game.Actions",
                methods: Ok(vec![
                    Method {
                        name: "Bad",
                        parameters: Ok(vec![]),
                        markers: Err("attribute assembly missing"),
                    },
                    Method::ok("Good", vec![TypeRef::named("System.Single")], vec![action()]),
                ]),
            },
        ],
    };

    let (sink, lines) = collecting_sink();
    let modules: Vec<Box<dyn ModuleMetadata>> = vec![Box::new(module)];
    let report = MetadataScanner::new(&ScanConfig::default())
        .with_sink(sink)
        .scan(&modules);

    assert_eq!(
        report.entries,
        vec![RegistryEntry::new(
            "Game.Actions.Good",
            "Game.Actions",
            "Good",
            vec!["System.Single".to_string()]
        )]
    );

    let units: Vec<_> = report.failures.iter().map(|f| f.unit).collect();
    assert_eq!(units, vec![ScanUnit::Type, ScanUnit::Method]);
    assert_eq!(report.failures[1].subject, "Game.Actions.Bad");

    let lines = lines.borrow();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Game.Broken"));
    assert!(lines[1].contains("attribute assembly missing"));
}

#[test]
fn test_unmarked_method_with_broken_parameters_is_not_a_failure() {
    let module = Module {
        name: "Game",
        types: vec![Type {
            name: "Game.Util",
            methods: Ok(vec![Method {
                name: "Helper",
                parameters: Err("unresolved parameter type"),
                markers: Ok(vec![]),
            }]),
        }],
    };

    let modules: Vec<Box<dyn ModuleMetadata>> = vec![Box::new(module)];
    let report = MetadataScanner::new(&ScanConfig::default()).scan(&modules);

    assert!(report.entries.is_empty());
    assert!(report.failures.is_empty());
    assert_eq!(report.stats.methods, 1);
}

#[test]
fn test_output_follows_module_then_host_order() {
    let first = Module {
        name: "First",
        types: vec![Type {
            name: "B",
            methods: Ok(vec![
                Method::ok("Z", vec![], vec![action()]),
                Method::ok("A", vec![], vec![Marker::new("CheckerAttribute")]),
            ]),
        }],
    };
    let second = Module {
        name: "Second",
        types: vec![Type {
            name: "A",
            methods: Ok(vec![Method::ok("M", vec![], vec![action()])]),
        }],
    };

    let modules: Vec<Box<dyn ModuleMetadata>> = vec![Box::new(first), Box::new(second)];
    let report = MetadataScanner::new(&ScanConfig::default()).scan(&modules);

    let keys: Vec<_> = report.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["B.Z", "B.A", "A.M"]);
}

#[test]
fn test_custom_marker_kinds() {
    let module = Module {
        name: "Game",
        types: vec![Type {
            name: "Game.Commands",
            methods: Ok(vec![
                Method::ok("Run", vec![], vec![Marker::new("CommandAttribute").with_field("Name", "run")]),
                Method::ok("Act", vec![], vec![action()]),
            ]),
        }],
    };
    let config = ScanConfig {
        marker_kinds: vec!["CommandAttribute".to_string()],
        key_field: "Name".to_string(),
    };

    let modules: Vec<Box<dyn ModuleMetadata>> = vec![Box::new(module)];
    let report = MetadataScanner::new(&config).scan(&modules);

    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].key, "run");
}
