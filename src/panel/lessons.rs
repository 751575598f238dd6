//! Step-by-step drawing lessons.
//!
//! A static read-only curriculum: ten short lessons that take a child from
//! basic shapes to keeping a sketchbook. The host renders them as scrollable
//! text; the CLI can print one or all of them.

/// A single lesson: a short title and the instruction text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    pub body: &'static str,
}

/// The built-in curriculum, in teaching order.
const LESSONS: [Lesson; 10] = [
    Lesson {
        title: "Start with Simple Shapes",
        body: "Practice drawing basic shapes like circles, squares, and triangles. \
               Focus on achieving smooth and consistent outlines.",
    },
    Lesson {
        title: "Combine Shapes to Create Objects",
        body: "Use basic shapes as building blocks to form more complex images. \
               For example, combine circles and rectangles to draw a simple house.",
    },
    Lesson {
        title: "Explore Line Variations",
        body: "Practice drawing straight, curved, and zigzag lines. \
               Experiment with line thickness to understand how it affects your drawing.",
    },
    Lesson {
        title: "Understand Proportions",
        body: "Study the size relationships between different parts of an object. \
               Practice by drawing simple human figures or animals, paying attention to proportion.",
    },
    Lesson {
        title: "Experiment with Shading",
        body: "Learn to create depth by adding shading to your drawings. \
               Practice techniques like hatching and cross-hatching to depict light and shadow.",
    },
    Lesson {
        title: "Use References",
        body: "Draw from real-life objects or photographs to improve observation skills. \
               Start with simple objects like fruits or everyday items.",
    },
    Lesson {
        title: "Practice Perspective Drawing",
        body: "Understand the basics of one-point and two-point perspective. \
               Practice by drawing simple 3D shapes like cubes and cylinders.",
    },
    Lesson {
        title: "Incorporate Details Gradually",
        body: "Start with the basic outline of your subject. \
               Add details step by step, such as textures and patterns.",
    },
    Lesson {
        title: "Explore Different Mediums",
        body: "Try using pencils, colored pencils, markers, or paints. \
               Understand how each medium affects your drawing style and outcome.",
    },
    Lesson {
        title: "Keep a Sketchbook",
        body: "Maintain a sketchbook to practice regularly and track your progress. \
               Use it to jot down ideas, practice techniques, and experiment freely.",
    },
];

/// Closing note shown after the last lesson.
pub const CLOSING_NOTE: &str = "Remember, drawing is a skill developed over time with \
consistent practice and patience. Encourage creativity and personal expression in every \
drawing session.";

/// The lessons panel. Holds no state; the content is compiled in.
#[derive(Debug, Default)]
pub struct LessonsPanel;

impl LessonsPanel {
    /// All lessons in teaching order.
    pub fn lessons(&self) -> &'static [Lesson] {
        &LESSONS
    }

    /// Looks up a lesson by its 1-based number as shown to the user.
    pub fn lesson(&self, number: usize) -> Option<&'static Lesson> {
        number.checked_sub(1).and_then(|i| LESSONS.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_lessons_in_teaching_order() {
        let panel = LessonsPanel;
        let lessons = panel.lessons();
        assert_eq!(lessons.len(), 10);
        assert_eq!(lessons[0].title, "Start with Simple Shapes");
        assert_eq!(lessons[9].title, "Keep a Sketchbook");
    }

    #[test]
    fn lookup_is_one_based() {
        let panel = LessonsPanel;
        assert_eq!(panel.lesson(1).map(|l| l.title), Some("Start with Simple Shapes"));
        assert_eq!(panel.lesson(10).map(|l| l.title), Some("Keep a Sketchbook"));
        assert!(panel.lesson(0).is_none());
        assert!(panel.lesson(11).is_none());
    }

    #[test]
    fn bodies_are_nonempty_prose() {
        for lesson in LessonsPanel.lessons() {
            assert!(!lesson.body.is_empty());
            assert!(lesson.body.ends_with('.'));
        }
    }
}
