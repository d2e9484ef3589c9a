//! Display implementations for domain models.
//!
//! Kept separate from the model definitions to maintain clean separation of
//! concerns. All output is markdown for rich terminal rendering. Array
//! order is preserved exactly as received from the generator.

use std::fmt;

use crate::models::{Activity, Assessment, LessonPlan};

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({} minutes)", self.step, self.time)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for item in &self.items {
            writeln!(f, "- {item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for LessonPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Subject: {}", self.subject)?;
        writeln!(f, "- Grade Level: {}", self.grade_level)?;
        writeln!(f, "- Duration: {}", self.duration)?;

        writeln!(f, "\n## 🎯 Learning Objectives")?;
        writeln!(f)?;
        for objective in &self.objectives {
            writeln!(f, "- {objective}")?;
        }

        writeln!(f, "\n## 🧪 Materials & Resources")?;
        writeln!(f)?;
        if self.materials.is_empty() {
            writeln!(f, "No materials required.")?;
        } else {
            for material in &self.materials {
                writeln!(f, "- {material}")?;
            }
        }

        writeln!(f, "\n## 📖 Lesson Activities")?;
        writeln!(f)?;
        for activity in &self.activities {
            write!(f, "{activity}")?;
        }

        writeln!(f, "## ✅ Assessment")?;
        writeln!(f)?;
        write!(f, "{}", self.assessment)?;

        writeln!(f, "\n## 👥 Differentiation")?;
        writeln!(f)?;
        write!(f, "{}", self.differentiation)?;

        Ok(())
    }
}
