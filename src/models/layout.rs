// Static project layout: the directories and files every generated
// FastAPI project starts with.

/// Placeholder substituted with the project name when a template renders.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// A boilerplate file to write under the project root.
///
/// `path` is relative to the project root and uses forward slashes.
/// `body` is a fixed template; occurrences of [`NAME_PLACEHOLDER`] are
/// replaced with the project name at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: &'static str,
    pub body: &'static str,
}

impl FileTemplate {
    /// Render the template body for the given project name.
    pub fn render(&self, project_name: &str) -> String {
        self.body.replace(NAME_PLACEHOLDER, project_name)
    }
}

/// Directories created under the project root, in creation order.
/// All paths are relative; parents are listed before their children.
pub const PROJECT_DIRS: &[&str] = &[
    "app",
    "app/config",
    "app/api/v1/routes",
    "app/api/v1/endpoints",
    "app/core",
    "app/models",
    "app/schemas",
    "app/services",
    "app/repositories",
    "app/utils",
    "app/middlewares",
    "app/tasks",
    "app/workers",
    "app/static",
    "tests",
    "tests/api",
    "tests/services",
    "tests/repositories",
    "migrations",
];

const GITIGNORE: &str = "__pycache__/\n.env\n*.pyc";

const README_MD: &str = "# {{name}}\nAn enterprise-level FastAPI boilerplate project.";

const REQUIREMENTS_TXT: &str = "fastapi\nuvicorn\npydantic\nsqlalchemy\nhttpx\nalembic\npytest";

const DOCKERFILE: &str = r#"FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000

CMD ["uvicorn", "app.main:app", "--host", "0.0.0.0", "--port", "8000"]
"#;

const DOCKER_COMPOSE_YML: &str = r#"services:
  api:
    build: .
    ports:
      - "8000:8000"
    env_file:
      - .env
"#;

const PYPROJECT_TOML: &str = r#"[project]
name = "{{name}}"
version = "0.1.0"
description = "An enterprise-level FastAPI boilerplate project."
requires-python = ">=3.11"

[tool.pytest.ini_options]
testpaths = ["tests"]
"#;

const DOTENV: &str = "DATABASE_URL=postgresql://localhost/app\nSECRET_KEY=changeme\n";

const MAIN_PY: &str = r#"from fastapi import FastAPI
from app.api.v1.routes import user, project
app = FastAPI(title="FastAPI Enterprise Application")

@app.get("/health")
async def health_check():
    return {"status": "healthy"}"#;

const SETTINGS_PY: &str = r#"from pydantic import BaseSettings
class Settings(BaseSettings):
    DATABASE_URL: str
    SECRET_KEY: str
settings = Settings()"#;

const TEST_MAIN_PY: &str = r#"from fastapi.testclient import TestClient
from app.main import app

client = TestClient(app)

def test_health_check():
    response = client.get("/health")
    assert response.status_code == 200
    assert response.json() == {"status": "healthy"}"#;

/// Files written under the project root, in creation order.
/// Only `README.md` and `pyproject.toml` interpolate the project name.
pub const PROJECT_FILES: &[FileTemplate] = &[
    FileTemplate {
        path: ".gitignore",
        body: GITIGNORE,
    },
    FileTemplate {
        path: "README.md",
        body: README_MD,
    },
    FileTemplate {
        path: "requirements.txt",
        body: REQUIREMENTS_TXT,
    },
    FileTemplate {
        path: "Dockerfile",
        body: DOCKERFILE,
    },
    FileTemplate {
        path: "docker-compose.yml",
        body: DOCKER_COMPOSE_YML,
    },
    FileTemplate {
        path: "pyproject.toml",
        body: PYPROJECT_TOML,
    },
    FileTemplate {
        path: ".env",
        body: DOTENV,
    },
    FileTemplate {
        path: "app/main.py",
        body: MAIN_PY,
    },
    FileTemplate {
        path: "app/config/settings.py",
        body: SETTINGS_PY,
    },
    FileTemplate {
        path: "tests/test_main.py",
        body: TEST_MAIN_PY,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_render_substitutes_name() {
        let readme = PROJECT_FILES
            .iter()
            .find(|f| f.path == "README.md")
            .unwrap();

        let rendered = readme.render("demo");
        assert_eq!(
            rendered,
            "# demo\nAn enterprise-level FastAPI boilerplate project."
        );
        assert!(!rendered.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn test_render_leaves_fixed_bodies_untouched() {
        let requirements = PROJECT_FILES
            .iter()
            .find(|f| f.path == "requirements.txt")
            .unwrap();

        assert_eq!(
            requirements.render("demo"),
            "fastapi\nuvicorn\npydantic\nsqlalchemy\nhttpx\nalembic\npytest"
        );
    }

    #[test]
    fn test_only_readme_and_pyproject_are_templated() {
        let templated: Vec<&str> = PROJECT_FILES
            .iter()
            .filter(|f| f.body.contains(NAME_PLACEHOLDER))
            .map(|f| f.path)
            .collect();

        assert_eq!(templated, vec!["README.md", "pyproject.toml"]);
    }

    #[test]
    fn test_rendered_pyproject_is_valid_toml() {
        let pyproject = PROJECT_FILES
            .iter()
            .find(|f| f.path == "pyproject.toml")
            .unwrap();

        let rendered = pyproject.render("demo");
        let value: toml::Value = toml::from_str(&rendered).unwrap();
        assert_eq!(
            value["project"]["name"].as_str(),
            Some("demo")
        );
    }

    #[test]
    fn test_directory_paths_are_relative_and_clean() {
        for dir in PROJECT_DIRS {
            let path = Path::new(dir);
            assert!(path.is_relative(), "{dir} must be relative");
            assert!(
                !path.components().any(|c| c.as_os_str() == ".."),
                "{dir} must not contain '..'"
            );
        }
    }

    #[test]
    fn test_file_parents_have_directory_entries() {
        for file in PROJECT_FILES {
            let parent = Path::new(file.path).parent().unwrap();
            if parent.as_os_str().is_empty() {
                continue; // root-level file
            }
            assert!(
                PROJECT_DIRS.contains(&parent.to_str().unwrap()),
                "parent of {} missing from directory list",
                file.path
            );
        }
    }
}
