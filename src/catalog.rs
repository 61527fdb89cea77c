//! Built-in tutorial content and the immutable catalog container.
//!
//! The built-ins guarantee the app is useful even without an external config
//! file. Step descriptions are HTML blobs consumed verbatim by the SPA; code
//! chunks carry their own rubric so the checker never has to consult a side
//! table.

use std::collections::HashMap;

use crate::domain::{CodeChunk, Difficulty, Rubric, Step, Tutorial};

/// Immutable set of predefined tutorials, indexed by id and by difficulty.
/// Built once at startup, shared read-only afterwards.
#[derive(Default)]
pub struct Catalog {
    by_id: HashMap<String, Tutorial>,
    by_difficulty: HashMap<Difficulty, Vec<String>>,
    order: Vec<String>,
}

impl Catalog {
    #[allow(dead_code)]
    pub fn from_tutorials(tutorials: Vec<Tutorial>) -> Self {
        let mut cat = Self::default();
        for t in tutorials {
            cat.insert(t);
        }
        cat
    }

    /// Insert a tutorial unless its id is already taken. Returns whether it
    /// was inserted; the first entry for an id wins.
    pub fn insert(&mut self, t: Tutorial) -> bool {
        if self.by_id.contains_key(&t.id) {
            return false;
        }
        self.by_difficulty
            .entry(t.difficulty)
            .or_default()
            .push(t.id.clone());
        self.order.push(t.id.clone());
        self.by_id.insert(t.id.clone(), t);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Tutorial> {
        self.by_id.get(id)
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Tutorials in insertion order, optionally filtered by difficulty.
    pub fn tutorials(&self, difficulty: Option<Difficulty>) -> Vec<&Tutorial> {
        let ids: &[String] = match difficulty {
            Some(d) => self
                .by_difficulty
                .get(&d)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            None => &self.order,
        };
        ids.iter().filter_map(|id| self.by_id.get(id)).collect()
    }
}

/// The predefined projects advertised on the landing page.
pub fn builtin_tutorials() -> Vec<Tutorial> {
    vec![
        todo_app_tutorial(),
        weather_app_tutorial(),
        blog_api_tutorial(),
        portfolio_tutorial(),
    ]
}

fn todo_app_tutorial() -> Tutorial {
    Tutorial {
        id: "todo-app".into(),
        title: "Building a Todo App with React".into(),
        description: "Learn how to build a simple todo application using React".into(),
        difficulty: Difficulty::Beginner,
        steps: vec![
            Step {
                id: "step-1".into(),
                title: "Setting up the project".into(),
                description: r#"
<p>In this step, we'll set up a new React project using Create React App.</p>
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
            Step {
                id: "step-3".into(),
                title: "Creating the TodoList component".into(),
                description: r#"
<p>Now, let's create a TodoList component that will display all todo items.</p>
<p>Create a new file called <code>TodoList.js</code> in the <code>src</code> directory.</p>
"#
                .into(),
                code_chunks: vec![todolist_component_chunk()],
            },
        ],
    }
}

fn weather_app_tutorial() -> Tutorial {
    Tutorial {
        id: "weather-app".into(),
        title: "Building a Weather App".into(),
        description: "Create a weather application that fetches data from a weather API".into(),
        difficulty: Difficulty::Intermediate,
        steps: vec![
            Step {
                id: "step-1".into(),
                title: "Project Setup".into(),
                description: r#"
<p>In this tutorial, we'll build a weather app that fetches data from a weather API.</p>
<p>First, let's set up our project:</p>
<ol>
  <li>Create a new React project using Create React App</li>
  <li>Install the necessary dependencies</li>
  <li>Set up the basic structure of our application</li>
</ol>
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

fn blog_api_tutorial() -> Tutorial {
    Tutorial {
        id: "blog-api".into(),
        title: "Building a Blog API".into(),
        description: "Develop a RESTful API for a blog using Node.js".into(),
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

fn portfolio_tutorial() -> Tutorial {
    Tutorial {
        id: "portfolio".into(),
        title: "Building a Portfolio Website".into(),
        description: "Build your own portfolio website with Next.js".into(),
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

// -------- Shared code-chunk content --------
//
// These chunks appear both in the predefined catalog and in the tutorials the
// resolver builds from free text, so they live here as single sources.

pub(crate) fn todo_component_chunk() -> CodeChunk {
    CodeChunk {
        id: "todo-component".into(),
        file_name: "Todo.js".into(),
        language: "javascript".into(),
        instructions: "Create a Todo component that displays a todo item with a checkbox to mark \
                       it as complete and a delete button."
            .into(),
        initial_code: r#"import React from 'react';

function Todo({ todo, onToggle, onDelete }) {
  // TODO: Implement the Todo component
  // 1. Display the todo text
  // 2. Add a checkbox to toggle the todo's completed status
  // 3. Add a delete button to remove the todo

  return (
    <div>
      {/* Your code here */}
    </div>
  );
}

export default Todo;"#
            .into(),
        expected_solution: r#"import React from 'react';

function Todo({ todo, onToggle, onDelete }) {
  return (
    <div className="todo-item" style={{ display: 'flex', alignItems: 'center', marginBottom: '8px' }}>
      <input
        type="checkbox"
        checked={todo.completed}
        onChange={() => onToggle(todo.id)}
      />
      <span style={{
        marginLeft: '8px',
        textDecoration: todo.completed ? 'line-through' : 'none'
      }}>
        {todo.text}
      </span>
      <button
        onClick={() => onDelete(todo.id)}
        style={{ marginLeft: 'auto', background: 'red', color: 'white', border: 'none', padding: '4px 8px', borderRadius: '4px' }}
      >
        Delete
      </button>
    </div>
  );
}

export default Todo;"#
            .into(),
        hints: vec![
            "Render an <input type=\"checkbox\"> whose checked state mirrors todo.completed."
                .into(),
            "Wire the checkbox onChange to onToggle(todo.id) and the button onClick to \
             onDelete(todo.id)."
                .into(),
        ],
        rubric: Some(Rubric {
            required: vec![
                "checkbox".into(),
                "todo.text".into(),
                "todo.completed".into(),
                "onDelete".into(),
                "onToggle".into(),
            ],
        }),
    }
}

pub(crate) fn todolist_component_chunk() -> CodeChunk {
    CodeChunk {
        id: "todolist-component".into(),
        file_name: "TodoList.js".into(),
        language: "javascript".into(),
        instructions: "Create a TodoList component that renders a list of Todo components.".into(),
        initial_code: r#"import React from 'react';
import Todo from './Todo';

function TodoList({ todos, onToggleTodo, onDeleteTodo }) {
  // TODO: Implement the TodoList component
  // 1. Map through the todos array
  // 2. Render a Todo component for each todo
  // 3. Pass the necessary props to each Todo component

  return (
    <div>
      {/* Your code here */}
    </div>
  );
}

export default TodoList;"#
            .into(),
        expected_solution: r#"import React from 'react';
import Todo from './Todo';

function TodoList({ todos, onToggleTodo, onDeleteTodo }) {
  return (
    <div className="todo-list">
      {todos.length === 0 ? (
        <p>No todos yet! Add one above.</p>
      ) : (
        todos.map(todo => (
          <Todo
            key={todo.id}
            todo={todo}
            onToggle={onToggleTodo}
            onDelete={onDeleteTodo}
          />
        ))
      )}
    </div>
  );
}

export default TodoList;"#
            .into(),
        hints: vec![
            "Use todos.map to turn each todo into a <Todo> element, keyed by todo.id.".into(),
        ],
        rubric: Some(Rubric {
            required: vec![
                "todos.map".into(),
                "Todo".into(),
                "key={todo.id}".into(),
                "onToggle".into(),
                "onDelete".into(),
            ],
        }),
    }
}

pub(crate) fn weather_service_chunk() -> CodeChunk {
    CodeChunk {
        id: "weather-service".into(),
        file_name: "weatherService.js".into(),
        language: "javascript".into(),
        instructions: "Create a service that fetches weather data from the OpenWeatherMap API."
            .into(),
        initial_code: r#"// We'll use the OpenWeatherMap API
// You'll need to sign up for a free API key at https://openweathermap.org/api

const API_KEY = 'YOUR_API_KEY'; // Replace with your actual API key
const BASE_URL = 'https://api.openweathermap.org/data/2.5';

// TODO: Implement the following functions:
// 1. getWeatherByCity - Fetches weather data for a specific city
// 2. getForecast - Fetches a 5-day forecast for a specific city

export const weatherService = {
  // Your code here
};"#
            .into(),
        expected_solution: r#"// We'll use the OpenWeatherMap API
// You'll need to sign up for a free API key at https://openweathermap.org/api

const API_KEY = 'YOUR_API_KEY'; // Replace with your actual API key
const BASE_URL = 'https://api.openweathermap.org/data/2.5';

export const weatherService = {
  getWeatherByCity: async (city) => {
    try {
      const response = await fetch(
        `${BASE_URL}/weather?q=${city}&units=metric&appid=${API_KEY}`
      );

      if (!response.ok) {
        throw new Error('Weather data not found');
      }

      return await response.json();
    } catch (error) {
      console.error('Error fetching weather:', error);
      throw error;
    }
  },

  getForecast: async (city) => {
    try {
      const response = await fetch(
        `${BASE_URL}/forecast?q=${city}&units=metric&appid=${API_KEY}`
      );

      if (!response.ok) {
        throw new Error('Forecast data not found');
      }

      return await response.json();
    } catch (error) {
      console.error('Error fetching forecast:', error);
      throw error;
    }
  }
};"#
            .into(),
        hints: vec!["Both functions share the same fetch-check-parse shape; only the endpoint \
                     path differs."
            .into()],
        // No automated checks for this exercise; the checker reports it as
        // ungraded rather than inventing a keyword list.
        rubric: None,
    }
}
