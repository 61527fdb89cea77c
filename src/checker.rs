//! Code-solution checking against a chunk's rubric, plus hint lookup.
//!
//! Grading is a lexical presence check: every rubric token must appear as an
//! exact, case-sensitive substring of the submission. There is no
//! tokenization, AST parsing, or execution, so logically correct code phrased
//! differently fails and required tokens pasted into comments pass. That
//! limitation is part of the contract, not an implementation shortcut.

use tracing::{debug, instrument};

use crate::domain::{CodeChunk, ValidationResult};

/// Grade one submission against one chunk. Pure and side-effect free: the
/// same `(user_code, chunk)` pair always produces the same verdict.
///
/// A chunk without a rubric yields an explicit ungraded result instead of a
/// silent pass: `is_correct` stays true so the learner is never blocked, but
/// `graded` is false and the message says nothing was checked.
#[instrument(level = "info", skip(user_code, chunk), fields(chunk_id = %chunk.id, code_len = user_code.len()))]
pub fn check(user_code: &str, chunk: &CodeChunk) -> ValidationResult {
    let Some(rubric) = &chunk.rubric else {
        debug!(target: "tutorial", chunk_id = %chunk.id, "No rubric on chunk; reporting ungraded");
        return ValidationResult {
            is_correct: true,
            graded: false,
            message: "This exercise has no automated checks. Compare your code with the \
                      suggested solution."
                .into(),
            solution: Some(chunk.expected_solution.clone()),
            explanation: None,
        };
    };

    let missing: Vec<&str> = rubric
        .required
        .iter()
        .filter(|token| !user_code.contains(token.as_str()))
        .map(String::as_str)
        .collect();

    if missing.is_empty() {
        ValidationResult {
            is_correct: true,
            graded: true,
            message: "Great job! Your solution looks correct.".into(),
            solution: None,
            explanation: None,
        }
    } else {
        debug!(target: "tutorial", chunk_id = %chunk.id, missing = missing.len(), "Submission incomplete");
        ValidationResult {
            is_correct: false,
            graded: true,
            message: "Your solution is missing some important elements.".into(),
            solution: Some(chunk.expected_solution.clone()),
            explanation: Some(format!(
                "Your code is missing: {}. Make sure you've implemented all the required \
                 functionality.",
                missing.join(", ")
            )),
        }
    }
}

/// Hint at `index` for a chunk, with fallbacks mirroring how the SPA walks
/// hints one by one. Stateless: the caller tracks which hint it is on.
#[instrument(level = "debug", skip(chunk), fields(chunk_id = %chunk.id, index))]
pub fn hint_text(chunk: &CodeChunk, index: usize) -> String {
    match chunk.hints.get(index) {
        Some(h) => h.clone(),
        None if chunk.hints.is_empty() => {
            "No hints are available for this exercise. Re-read the instructions and the scaffold \
             comments."
                .into()
        }
        None => "No more hints. Compare your code against the exercise instructions.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{todo_component_chunk, weather_service_chunk};
    use crate::domain::Rubric;

    #[test]
    fn all_tokens_present_grades_correct() {
        let chunk = todo_component_chunk();
        let code = "const el = <input type=\"checkbox\" checked={todo.completed} \
                    onChange={() => onToggle(todo.id)} />; {todo.text}; onDelete(todo.id);";
        let result = check(code, &chunk);
        assert!(result.is_correct);
        assert!(result.graded);
        assert_eq!(result.message, "Great job! Your solution looks correct.");
        assert!(result.solution.is_none());
        assert!(result.explanation.is_none());
    }

    #[test]
    fn expected_solution_passes_its_own_rubric() {
        let chunk = todo_component_chunk();
        let solution = chunk.expected_solution.clone();
        assert!(check(&solution, &chunk).is_correct);
    }

    #[test]
    fn missing_tokens_are_listed_in_rubric_order() {
        let chunk = todo_component_chunk();
        let result = check("checkbox plus todo.text and nothing else", &chunk);
        assert!(!result.is_correct);
        assert!(result.graded);
        assert_eq!(result.message, "Your solution is missing some important elements.");
        assert_eq!(result.solution.as_deref(), Some(chunk.expected_solution.as_str()));
        assert_eq!(
            result.explanation.as_deref(),
            Some(
                "Your code is missing: todo.completed, onDelete, onToggle. Make sure you've \
                 implemented all the required functionality."
            )
        );
    }

    #[test]
    fn containment_is_case_sensitive() {
        let chunk = todo_component_chunk();
        let result = check(
            "CHECKBOX TODO.TEXT TODO.COMPLETED ONDELETE ONTOGGLE",
            &chunk,
        );
        assert!(!result.is_correct);
    }

    #[test]
    fn check_is_idempotent() {
        let chunk = todo_component_chunk();
        let code = "checkbox only";
        let a = check(code, &chunk);
        let b = check(code, &chunk);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn chunk_without_rubric_is_explicitly_ungraded() {
        let chunk = weather_service_chunk();
        let result = check("anything at all", &chunk);
        assert!(result.is_correct);
        assert!(!result.graded);
        assert_eq!(result.solution.as_deref(), Some(chunk.expected_solution.as_str()));
    }

    #[test]
    fn empty_rubric_grades_correct() {
        let mut chunk = weather_service_chunk();
        chunk.rubric = Some(Rubric::default());
        let result = check("", &chunk);
        assert!(result.is_correct);
        assert!(result.graded);
    }

    #[test]
    fn hints_walk_in_order_then_fall_back() {
        let chunk = todo_component_chunk();
        assert_eq!(hint_text(&chunk, 0), chunk.hints[0]);
        assert_eq!(hint_text(&chunk, 1), chunk.hints[1]);
        assert!(hint_text(&chunk, 99).starts_with("No more hints"));

        let mut bare = chunk.clone();
        bare.hints.clear();
        assert!(hint_text(&bare, 0).starts_with("No hints are available"));
    }
}
