//! Template builders for tutorials synthesized from a free-text prompt.
//!
//! Each builder is a pure function of the generated id and the prompt: the
//! structural content (steps, chunks, instructions, code) is fixed per
//! template, only the id varies between calls. The generic template is the
//! universal fallback and embeds the verbatim prompt in its description.

use crate::catalog::{todo_component_chunk, weather_service_chunk};
use crate::domain::{Difficulty, Step, Tutorial};
use crate::util::fill_template;

/// Builder signature shared by every template so the resolver can hold them
/// in one ordered rule table.
pub type TemplateBuilder = fn(String, &str) -> Tutorial;

pub fn todo_app(id: String, _prompt: &str) -> Tutorial {
    Tutorial {
        id,
        title: "Building a Todo Application".into(),
        description: "Learn how to build a todo app based on your requirements".into(),
        difficulty: Difficulty::Beginner,
        steps: vec![
            Step {
                id: "step-1".into(),
                title: "Setting up the project".into(),
                description: r#"
<p>Let's start by setting up a new React project for your todo application.</p>
<ol>
  <li>Open your terminal</li>
  <li>Navigate to the directory where you want to create your project</li>
  <li>Run the following command to create a new React project:</li>
</ol>
<pre><code>npx create-react-app todo-app
cd todo-app
npm start</code></pre>
<p>This will create a new React project and start the development server.</p>
"#
                .into(),
                code_chunks: vec![],
            },
            Step {
                id: "step-2".into(),
                title: "Creating the Todo component".into(),
                description: r#"
<p>Now, let's create a Todo component that will display a single todo item.</p>
<p>Create a new file called <code>Todo.js</code> in the <code>src</code> directory.</p>
"#
                .into(),
                code_chunks: vec![todo_component_chunk()],
            },
        ],
    }
}

pub fn weather_app(id: String, _prompt: &str) -> Tutorial {
    Tutorial {
        id,
        title: "Building a Weather Application".into(),
        description: "Create a weather app that fetches data from a weather API".into(),
        difficulty: Difficulty::Intermediate,
        steps: vec![
            Step {
                id: "step-1".into(),
                title: "Setting up the project".into(),
                description: r#"
<p>Let's start by setting up a new React project for your weather application.</p>
<ol>
  <li>Open your terminal</li>
  <li>Navigate to the directory where you want to create your project</li>
  <li>Run the following command to create a new React project:</li>
</ol>
<pre><code>npx create-react-app weather-app
cd weather-app
npm start</code></pre>
<p>This will create a new React project and start the development server.</p>
"#
                .into(),
                code_chunks: vec![],
            },
            Step {
                id: "step-2".into(),
                title: "Creating the Weather API service".into(),
                description: r#"
<p>Now, let's create a service to fetch weather data from an API.</p>
<p>Create a new file called <code>weatherService.js</code> in the <code>src</code> directory.</p>
"#
                .into(),
                code_chunks: vec![weather_service_chunk()],
            },
        ],
    }
}

pub fn blog_api(id: String, _prompt: &str) -> Tutorial {
    Tutorial {
        id,
        title: "Building a Blog API".into(),
        description: "Create a RESTful API for a blog using Node.js and Express".into(),
        difficulty: Difficulty::Advanced,
        steps: vec![Step {
            id: "step-1".into(),
            title: "Setting up the project".into(),
            description: r#"
<p>Let's start by setting up a new Node.js project for your blog API.</p>
<ol>
  <li>Create a new directory for your project</li>
  <li>Initialize a new Node.js project</li>
  <li>Install the necessary dependencies</li>
</ol>
<pre><code>mkdir blog-api
cd blog-api
npm init -y
npm install express mongoose dotenv cors</code></pre>
<p>This will create a new Node.js project and install the required dependencies.</p>
"#
            .into(),
            code_chunks: vec![],
        }],
    }
}

pub fn portfolio(id: String, _prompt: &str) -> Tutorial {
    Tutorial {
        id,
        title: "Building a Portfolio Website".into(),
        description: "Create a personal portfolio website to showcase your work".into(),
        difficulty: Difficulty::Intermediate,
        steps: vec![Step {
            id: "step-1".into(),
            title: "Setting up the project".into(),
            description: r#"
<p>Let's start by setting up a new Next.js project for your portfolio website.</p>
<ol>
  <li>Create a new Next.js project</li>
  <li>Install the necessary dependencies</li>
  <li>Start the development server</li>
</ol>
<pre><code>npx create-next-app portfolio-website
cd portfolio-website
npm run dev</code></pre>
<p>This will create a new Next.js project and start the development server.</p>
"#
            .into(),
            code_chunks: vec![],
        }],
    }
}

pub fn generic(id: String, prompt: &str) -> Tutorial {
    Tutorial {
        id,
        title: "Custom Project".into(),
        description: fill_template(
            r#"A custom project based on your description: "{prompt}""#,
            &[("prompt", prompt)],
        ),
        difficulty: Difficulty::Intermediate,
        steps: vec![Step {
            id: "step-1".into(),
            title: "Setting up your project".into(),
            description: r#"
<p>Let's start by setting up a new project based on your requirements.</p>
<p>Based on your description, we'll create a custom project structure that fits your needs.</p>
<ol>
  <li>Create a new directory for your project</li>
  <li>Initialize a new project with the appropriate tools</li>
  <li>Install the necessary dependencies</li>
</ol>
<p>We'll guide you through each step of the process.</p>
"#
            .into(),
            code_chunks: vec![],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_yields_at_least_one_step() {
        let builders: [TemplateBuilder; 5] = [todo_app, weather_app, blog_api, portfolio, generic];
        for build in builders {
            let t = build("custom-test".into(), "anything");
            assert!(!t.steps.is_empty());
            assert_eq!(t.id, "custom-test");
        }
    }

    #[test]
    fn generic_embeds_the_verbatim_prompt() {
        let t = generic("custom-x".into(), "a kanban board for recipes");
        assert!(t
            .description
            .contains(r#"your description: "a kanban board for recipes""#));
    }
}
