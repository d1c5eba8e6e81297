mod common;

use common::{choices, BrokenRegistry, FakeRegistry};
use pkgscaffold::error::Error;
use pkgscaffold::processor::{generate, populate_variables, Builder};
use pkgscaffold::template::TemplateSet;
use pkgscaffold::variables::Variable;
use std::fs;
use tempfile::TempDir;

fn build(auto_release: bool, ts: bool, lint: bool, prettier: bool) -> pkgscaffold::tree::DirNode {
    let choices = choices(auto_release, ts, lint, prettier);
    let templates = TemplateSet::bundled();
    let store = populate_variables(&FakeRegistry, &choices).unwrap();
    Builder::new(&choices, &templates, &store).build().unwrap()
}

#[test]
fn test_typescript_with_release_scaffold() {
    let root = build(true, true, false, false);

    assert_eq!(root.name, "my-pkg");
    let manifest = root.file("package.json").unwrap();
    assert!(manifest.contains(
        "  \"scripts\": {\n    \"build\": \"rollup --config ./rollup.config.js && rollup --config ./rollup.config.dts.js\",\n    \"release\": \"bash ./publish.sh\"\n  },"
    ));
    assert!(manifest.contains("\"name\": \"my-pkg\","));
    assert!(manifest.contains("\"description\": \"desc\","));
    assert!(manifest.contains("\"author\": \"me\","));

    for file in ["tsconfig.json", "tsconfig.node.json", "rollup.config.dts.js", "publish.sh", "src/index.ts"] {
        assert!(root.file(file).is_some(), "missing {file}");
    }
    for file in ["eslint.config.mjs", ".prettierrc", ".prettierignore", "publish.ps1", "src/index.js"] {
        assert!(root.find(file).is_none(), "unexpected {file}");
    }
}

#[test]
fn test_file_order() {
    let root = build(true, true, true, true);
    assert_eq!(
        root.file_paths(),
        vec![
            "package.json",
            ".npmrc",
            "rollup.config.js",
            "tsconfig.json",
            "tsconfig.node.json",
            "rollup.config.dts.js",
            "eslint.config.mjs",
            ".prettierignore",
            ".prettierrc",
            "src/index.ts",
            "publish.sh",
            "README.md",
            "LICENSE",
        ]
    );
}

#[test]
fn test_javascript_scaffold() {
    let root = build(false, false, false, false);

    let bundler = root.file("rollup.config.js").unwrap();
    assert!(!bundler.to_lowercase().contains("typescript"));
    assert!(!bundler.contains(".ts'"));
    assert!(bundler.contains("joinTo('src/index.js')"));
    assert!(!bundler.contains("#region"));

    assert!(root.file("src/index.js").is_some());
    assert!(root.find("src/index.ts").is_none());
    assert!(root.find("publish.sh").is_none());

    let manifest = root.file("package.json").unwrap();
    assert!(manifest.contains("    \"build\": \"rollup --config ./rollup.config.js\"\n  },"));
    assert!(!manifest.contains("release"));
}

#[test]
fn test_lint_config_filters() {
    let root = build(false, false, true, false);
    let lint = root.file("eslint.config.mjs").unwrap().to_lowercase();
    assert!(!lint.contains("typescript"));
    assert!(!lint.contains("dts"));
    assert!(!lint.contains("prettier"));
    assert!(!lint.contains("tseslint"));
    assert!(lint.contains("js.configs.recommended"));

    let root = build(false, true, true, true);
    let lint = root.file("eslint.config.mjs").unwrap();
    assert!(lint.contains("...tseslint.configs.recommended,"));
    assert!(lint.contains("prettierRecommended"));
    assert!(!lint.contains("#region"));
}

#[test]
fn test_dev_dependencies_sorted_and_monotonic() {
    let flags = [
        (false, false, false),
        (true, false, false),
        (true, true, false),
        (true, true, true),
    ];
    let mut previous: Vec<String> = Vec::new();
    for (ts, lint, prettier) in flags {
        let store = populate_variables(&FakeRegistry, &choices(false, ts, lint, prettier)).unwrap();
        let lines: Vec<String> =
            store.get(Variable::DevDependencies).lines().iter().flatten().cloned().collect();

        let mut sorted = lines.clone();
        sorted.sort();
        assert_eq!(lines, sorted);
        assert!(previous.iter().all(|dep| lines.contains(dep)));
        previous = lines;
    }
    assert!(previous.contains(&r#""vite": "^6.0.0""#.to_string()));
    assert!(previous.contains(&r#""typescript-eslint": "^17.0.0""#.to_string()));
    assert!(previous.contains(&r#""eslint-plugin-prettier": "^22.0.0""#.to_string()));
}

#[test]
fn test_manifest_dependencies_block() {
    let root = build(false, false, false, false);
    let manifest = root.file("package.json").unwrap();
    assert!(manifest.contains(
        "  \"devDependencies\": {\n    \"@rollup/plugin-alias\": \"^20.0.0\",\n"
    ));
    assert!(manifest.contains("    \"vite\": \"^6.0.0\"\n  }\n}"));
}

#[test]
fn test_placeholders_resolved_everywhere() {
    let root = build(true, true, true, true);
    for path in root.file_paths() {
        assert!(!root.file(&path).unwrap().contains("[let:"), "unresolved placeholder in {path}");
    }
    assert!(root.file("README.md").unwrap().starts_with("# my-pkg\n\ndesc\n"));
    assert!(root.file("LICENSE").unwrap().contains("Copyright (c) me"));
}

#[test]
fn test_generate_writes_tree() {
    let temp_dir = TempDir::new().unwrap();
    let choices = choices(true, true, true, true);
    let root = generate(&choices, &TemplateSet::bundled(), &FakeRegistry, temp_dir.path()).unwrap();

    assert_eq!(root, temp_dir.path().join("my-pkg"));
    assert!(root.join("src/index.ts").is_file());
    assert!(root.join("publish.sh").is_file());
    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"release\": \"bash ./publish.sh\""));
}

#[test_log::test]
fn test_registry_failure_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let choices = choices(true, true, true, true);
    let result =
        generate(&choices, &TemplateSet::bundled(), &BrokenRegistry("prettier"), temp_dir.path());

    assert!(matches!(result, Err(Error::RegistryLookupError { .. })));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_existing_output_directory_is_refused() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("my-pkg")).unwrap();
    let result = generate(
        &choices(false, false, false, false),
        &TemplateSet::bundled(),
        &FakeRegistry,
        temp_dir.path(),
    );

    assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
}

#[test]
fn test_missing_template_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("package.json.template.txt"), "{}").unwrap();
    let templates = TemplateSet::from_dir(temp_dir.path()).unwrap();
    let choices = choices(false, false, false, false);
    let store = populate_variables(&FakeRegistry, &choices).unwrap();
    let result = Builder::new(&choices, &templates, &store).build();

    match result {
        Err(Error::TemplateNotFoundError { name }) => assert_eq!(name, ".npmrc"),
        other => panic!("Expected TemplateNotFoundError, got {other:?}"),
    }
}

#[test]
fn test_absolute_name_stays_below_output_parent() {
    let cwd = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let escaped = elsewhere.path().join("escaped");
    let mut choices = choices(false, false, false, false);
    choices.name = escaped.to_string_lossy().to_string();

    let result = generate(&choices, &TemplateSet::bundled(), &FakeRegistry, cwd.path());

    assert!(matches!(result, Err(Error::ValidationError(_))));
    assert!(!escaped.exists());
    assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
}
