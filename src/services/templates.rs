//! Template registry - maps a project type to its file set
//!
//! Each project type declares an ordered list of relative file paths with an
//! embedded Tera template per file. Generators are pure functions of
//! (project name, description) and are safe to call concurrently.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tera::{Context as TeraContext, Tera};

/// Closed set of project types the registry can materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Html,
}

impl ProjectType {
    /// Resolves a client-supplied type key. Unknown keys fall back to the
    /// default `html` template instead of failing: every registered type
    /// yields a complete static site, so the permissive path is safe.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "html" => ProjectType::Html,
            other => {
                tracing::debug!("unknown project type {:?}, using html template", other);
                ProjectType::Html
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Html => "html",
        }
    }
}

/// One declared file of a project template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Name of the registered Tera template rendering this file.
    template: &'static str,
}

const HTML_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "index.html",
        template: "html/index.html.tera",
    },
    TemplateFile {
        path: "styles.css",
        template: "html/styles.css.tera",
    },
    TemplateFile {
        path: "script.js",
        template: "html/script.js.tera",
    },
    TemplateFile {
        path: "README.md",
        template: "html/README.md.tera",
    },
];

/// Registry over the embedded project templates.
pub struct TemplateRegistry {
    tera: Tera,
}

impl TemplateRegistry {
    /// Create a registry with all embedded templates registered.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("html/index.html.tera", HTML_INDEX_TEMPLATE)
            .context("Failed to add index.html template")?;
        tera.add_raw_template("html/styles.css.tera", HTML_STYLES_TEMPLATE)
            .context("Failed to add styles.css template")?;
        tera.add_raw_template("html/script.js.tera", HTML_SCRIPT_TEMPLATE)
            .context("Failed to add script.js template")?;
        tera.add_raw_template("html/README.md.tera", HTML_README_TEMPLATE)
            .context("Failed to add README.md template")?;

        Ok(Self { tera })
    }

    pub fn types(&self) -> &'static [ProjectType] {
        &[ProjectType::Html]
    }

    /// Ordered file declarations for a project type. Order is part of the
    /// contract: the synthesizer writes files in exactly this sequence.
    pub fn files_for(&self, project_type: ProjectType) -> &'static [TemplateFile] {
        match project_type {
            ProjectType::Html => HTML_FILES,
        }
    }

    /// Render one declared file for the given project name and description.
    pub fn render(
        &self,
        file: &TemplateFile,
        name: &str,
        description: &str,
    ) -> tera::Result<String> {
        let mut context = TeraContext::new();
        context.insert("name", name);
        context.insert("description", description);

        self.tera.render(file.template, &context)
    }
}

// ============================================================================
// Embedded Templates
// ============================================================================

const HTML_INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }}</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <div class="container">
        <header>
            <h1>{{ name }}</h1>
            <p>{{ description }}</p>
        </header>
        <main>
            <p>Создано с помощью SiteForge</p>
        </main>
    </div>
    <script src="script.js"></script>
</body>
</html>"#;

const HTML_STYLES_TEMPLATE: &str = r#"body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 0;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
}

.container {
    text-align: center;
    color: white;
    padding: 2rem;
    background: rgba(255, 255, 255, 0.1);
    border-radius: 20px;
    backdrop-filter: blur(10px);
}

h1 {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}

p {
    font-size: 1.2rem;
    margin-bottom: 1rem;
}"#;

const HTML_SCRIPT_TEMPLATE: &str = r#"console.log('Приложение загружено!');

document.addEventListener('DOMContentLoaded', function() {
    const container = document.querySelector('.container');

    container.addEventListener('click', function() {
        this.style.transform = 'scale(1.05)';
        setTimeout(() => {
            this.style.transform = 'scale(1)';
        }, 200);
    });
});"#;

const HTML_README_TEMPLATE: &str = r#"# {{ name }}

{{ description }}

## Создано с помощью SiteForge

### Запуск

Просто откройте index.html в браузере или используйте локальный сервер:

```bash
python -m http.server 8000
```

Затем откройте http://localhost:8000"#;
