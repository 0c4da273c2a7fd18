//! Template engine for rendering site pages.

use minijinja::{context, Environment};

use folio_content::Navigation;

/// Site-wide context available to every template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteContext {
    /// Site title
    pub title: String,
    /// Base URL
    pub base_url: String,
    /// Sidebar navigation tree
    pub navigation: Navigation,
}

/// A project card on the index page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
}

/// Projects of one category, as shown on the index page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CategoryGroup {
    pub label: String,
    pub projects: Vec<ProjectCard>,
}

/// A post entry on the blog index.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub url: String,
    pub date: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("page.html", PAGE_TEMPLATE),
            ("project.html", PROJECT_TEMPLATE),
            ("post.html", POST_TEMPLATE),
            ("blog.html", BLOG_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add embedded template");
        }

        Self { env }
    }

    /// Render the project index page.
    pub fn render_index(
        &self,
        site: &SiteContext,
        groups: &[CategoryGroup],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;
        tmpl.render(context! {
            site => site,
            title => "Home",
            groups => groups,
        })
    }

    /// Render a standalone page.
    pub fn render_page(
        &self,
        site: &SiteContext,
        title: &str,
        content: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;
        tmpl.render(context! {
            site => site,
            title => title,
            content => content,
        })
    }

    /// Render a project page.
    pub fn render_project(
        &self,
        site: &SiteContext,
        title: &str,
        category: &str,
        tags: &[String],
        content: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("project.html")?;
        tmpl.render(context! {
            site => site,
            title => title,
            category => category,
            tags => tags,
            content => content,
        })
    }

    /// Render a blog post page.
    pub fn render_post(
        &self,
        site: &SiteContext,
        title: &str,
        date: &str,
        content: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("post.html")?;
        tmpl.render(context! {
            site => site,
            title => title,
            date => date,
            content => content,
        })
    }

    /// Render the blog index page.
    pub fn render_blog(
        &self,
        site: &SiteContext,
        posts: &[PostCard],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("blog.html")?;
        tmpl.render(context! {
            site => site,
            title => "Blog",
            posts => posts,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site.title }}</title>
  <link rel="stylesheet" href="{{ site.base_url }}assets/css/site.css">
</head>
<body>
  <div class="layout">
    <nav class="sidebar">
      <div class="nav-header">
        <a href="{{ site.base_url }}" class="nav-logo">{{ site.title }}</a>
      </div>
      {% for section in site.navigation.sections %}
      <div class="nav-section">
        {% if section.landing %}
        <a class="nav-label" href="{{ section.landing }}">{{ section.label }}</a>
        {% else %}
        <span class="nav-label">{{ section.label }}</span>
        {% endif %}
        <ul class="nav-list">
          {% for link in section.links %}
          <li class="nav-item"><a href="{{ link.path }}">{{ link.label }}</a></li>
          {% endfor %}
        </ul>
      </div>
      {% endfor %}
    </nav>
    <main class="main">
      {% block content %}{% endblock %}
    </main>
  </div>
</body>
</html>"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% for group in groups %}
<section class="project-group">
  <h2>{{ group.label }}</h2>
  <ul class="project-list">
    {% for project in group.projects %}
    <li class="project-card" data-tags="{{ project.tags | join(' ') }}">
      <a href="{{ project.url }}">{{ project.title }}</a>
      {% if project.tags %}
      <ul class="tag-list">
        {% for tag in project.tags %}<li class="tag">{{ tag }}</li>{% endfor %}
      </ul>
      {% endif %}
    </li>
    {% endfor %}
  </ul>
</section>
{% endfor %}
{% endblock %}"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="page">
  {{ content | safe }}
</article>
{% endblock %}"##;

const PROJECT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="project" data-category="{{ category }}">
  <header>
    <h1>{{ title }}</h1>
    {% if tags %}
    <ul class="tag-list">
      {% for tag in tags %}<li class="tag">{{ tag }}</li>{% endfor %}
    </ul>
    {% endif %}
  </header>
  {{ content | safe }}
</article>
{% endblock %}"##;

const POST_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="post">
  <header>
    <h1>{{ title }}</h1>
    <time>{{ date }}</time>
  </header>
  {{ content | safe }}
</article>
{% endblock %}"##;

const BLOG_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="blog">
  <h1>Blog</h1>
  <ul class="post-list">
    {% for post in posts %}
    <li class="post-entry">
      <time>{{ post.date }}</time>
      <a href="{{ post.url }}">{{ post.title }}</a>
    </li>
    {% endfor %}
  </ul>
</section>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::{NavLink, NavSection};

    fn site() -> SiteContext {
        SiteContext {
            title: "Portfolio".to_string(),
            base_url: "/".to_string(),
            navigation: Navigation {
                sections: vec![NavSection {
                    label: "Work".to_string(),
                    landing: Some("/work/".to_string()),
                    links: vec![NavLink {
                        label: "Projects".to_string(),
                        path: "/projects/".to_string(),
                    }],
                }],
            },
        }
    }

    #[test]
    fn renders_page_with_navigation() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_page(&site(), "About", "<p>Hello</p>")
            .unwrap();

        assert!(html.contains("<title>About - Portfolio</title>"));
        assert!(html.contains("<p>Hello</p>"));
        assert!(html.contains(r#"<a class="nav-label" href="/work/">Work</a>"#));
        assert!(html.contains("Projects"));
    }

    #[test]
    fn renders_index_groups() {
        let engine = TemplateEngine::new();
        let groups = vec![CategoryGroup {
            label: "Content design".to_string(),
            projects: vec![ProjectCard {
                id: "errors".to_string(),
                title: "Error messages".to_string(),
                url: "/projects/errors/".to_string(),
                tags: vec!["ux-writing".to_string()],
            }],
        }];

        let html = engine.render_index(&site(), &groups).unwrap();

        assert!(html.contains("Content design"));
        assert!(html.contains("/projects/errors/"));
        assert!(html.contains("ux-writing"));
    }

    #[test]
    fn renders_post_with_date() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_post(&site(), "Launch", "March 14, 2025", "<p>Out now.</p>")
            .unwrap();

        assert!(html.contains("<time>March 14, 2025</time>"));
        assert!(html.contains("Out now."));
    }
}
