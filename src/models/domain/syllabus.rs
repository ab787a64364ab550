use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder substituted for any field the extractor cannot locate.
pub const NOT_SPECIFIED: &str = "Non spécifié";

/// Whether a field's value is the rest of its label line or a block running
/// up to the next label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMode {
    SingleLine,
    MultiLine,
}

/// The 18 recognized syllabus fields, in template order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyllabusField {
    CourseName,
    Semester,
    EctsCredits,
    Hours,
    Lectures,
    Tutorials,
    Practicals,
    Projects,
    MainTeacher,
    TeachingTeam,
    TeachingMethod,
    Language,
    Objectives,
    Prerequisites,
    Content,
    Skills,
    Evaluation,
    References,
}

impl SyllabusField {
    pub const ALL: [SyllabusField; 18] = [
        SyllabusField::CourseName,
        SyllabusField::Semester,
        SyllabusField::EctsCredits,
        SyllabusField::Hours,
        SyllabusField::Lectures,
        SyllabusField::Tutorials,
        SyllabusField::Practicals,
        SyllabusField::Projects,
        SyllabusField::MainTeacher,
        SyllabusField::TeachingTeam,
        SyllabusField::TeachingMethod,
        SyllabusField::Language,
        SyllabusField::Objectives,
        SyllabusField::Prerequisites,
        SyllabusField::Content,
        SyllabusField::Skills,
        SyllabusField::Evaluation,
        SyllabusField::References,
    ];

    /// The literal label the generator emits and the extractor matches.
    pub fn label(self) -> &'static str {
        match self {
            SyllabusField::CourseName => "Nom du Cours",
            SyllabusField::Semester => "Semestre",
            SyllabusField::EctsCredits => "Crédits ECTS",
            SyllabusField::Hours => "Nombre d'heures dispensées",
            SyllabusField::Lectures => "Cours Magistraux",
            SyllabusField::Tutorials => "Travaux Dirigés",
            SyllabusField::Practicals => "Travaux Pratiques",
            SyllabusField::Projects => "Projets",
            SyllabusField::MainTeacher => "Enseignant référent",
            SyllabusField::TeachingTeam => "Equipe d'enseignants",
            SyllabusField::TeachingMethod => "Modalité pédagogique",
            SyllabusField::Language => "Langue",
            SyllabusField::Objectives => "Objectifs pédagogiques",
            SyllabusField::Prerequisites => "Pré requis",
            SyllabusField::Content => "Contenu",
            SyllabusField::Skills => "Compétences à acquérir",
            SyllabusField::Evaluation => "Modalités d'évaluation",
            SyllabusField::References => "Références externes",
        }
    }

    /// The serialized key, also used by the field-edit endpoint.
    pub fn key(self) -> &'static str {
        match self {
            SyllabusField::CourseName => "courseName",
            SyllabusField::Semester => "semester",
            SyllabusField::EctsCredits => "ectsCredits",
            SyllabusField::Hours => "hours",
            SyllabusField::Lectures => "lectures",
            SyllabusField::Tutorials => "tutorials",
            SyllabusField::Practicals => "practicals",
            SyllabusField::Projects => "projects",
            SyllabusField::MainTeacher => "mainTeacher",
            SyllabusField::TeachingTeam => "teachingTeam",
            SyllabusField::TeachingMethod => "teachingMethod",
            SyllabusField::Language => "language",
            SyllabusField::Objectives => "objectives",
            SyllabusField::Prerequisites => "prerequisites",
            SyllabusField::Content => "content",
            SyllabusField::Skills => "skills",
            SyllabusField::Evaluation => "evaluation",
            SyllabusField::References => "references",
        }
    }

    pub fn mode(self) -> FieldMode {
        match self {
            SyllabusField::Objectives
            | SyllabusField::Prerequisites
            | SyllabusField::Content
            | SyllabusField::Skills
            | SyllabusField::Evaluation
            | SyllabusField::References => FieldMode::MultiLine,
            _ => FieldMode::SingleLine,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        SyllabusField::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// A structured course description. Every field is always present; a field
/// the extractor could not locate holds [`NOT_SPECIFIED`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllabus {
    pub course_name: String,
    pub semester: String,
    pub ects_credits: String,
    pub hours: String,
    pub lectures: String,
    pub tutorials: String,
    pub practicals: String,
    pub projects: String,
    pub main_teacher: String,
    pub teaching_team: String,
    pub teaching_method: String,
    pub language: String,
    pub objectives: String,
    pub prerequisites: String,
    pub content: String,
    pub skills: String,
    pub evaluation: String,
    pub references: String,
}

impl Syllabus {
    /// A record with every field set to the sentinel value.
    pub fn unspecified() -> Self {
        Syllabus {
            course_name: NOT_SPECIFIED.to_string(),
            semester: NOT_SPECIFIED.to_string(),
            ects_credits: NOT_SPECIFIED.to_string(),
            hours: NOT_SPECIFIED.to_string(),
            lectures: NOT_SPECIFIED.to_string(),
            tutorials: NOT_SPECIFIED.to_string(),
            practicals: NOT_SPECIFIED.to_string(),
            projects: NOT_SPECIFIED.to_string(),
            main_teacher: NOT_SPECIFIED.to_string(),
            teaching_team: NOT_SPECIFIED.to_string(),
            teaching_method: NOT_SPECIFIED.to_string(),
            language: NOT_SPECIFIED.to_string(),
            objectives: NOT_SPECIFIED.to_string(),
            prerequisites: NOT_SPECIFIED.to_string(),
            content: NOT_SPECIFIED.to_string(),
            skills: NOT_SPECIFIED.to_string(),
            evaluation: NOT_SPECIFIED.to_string(),
            references: NOT_SPECIFIED.to_string(),
        }
    }

    pub fn field(&self, field: SyllabusField) -> &str {
        match field {
            SyllabusField::CourseName => &self.course_name,
            SyllabusField::Semester => &self.semester,
            SyllabusField::EctsCredits => &self.ects_credits,
            SyllabusField::Hours => &self.hours,
            SyllabusField::Lectures => &self.lectures,
            SyllabusField::Tutorials => &self.tutorials,
            SyllabusField::Practicals => &self.practicals,
            SyllabusField::Projects => &self.projects,
            SyllabusField::MainTeacher => &self.main_teacher,
            SyllabusField::TeachingTeam => &self.teaching_team,
            SyllabusField::TeachingMethod => &self.teaching_method,
            SyllabusField::Language => &self.language,
            SyllabusField::Objectives => &self.objectives,
            SyllabusField::Prerequisites => &self.prerequisites,
            SyllabusField::Content => &self.content,
            SyllabusField::Skills => &self.skills,
            SyllabusField::Evaluation => &self.evaluation,
            SyllabusField::References => &self.references,
        }
    }

    pub fn set_field(&mut self, field: SyllabusField, value: String) {
        let slot = match field {
            SyllabusField::CourseName => &mut self.course_name,
            SyllabusField::Semester => &mut self.semester,
            SyllabusField::EctsCredits => &mut self.ects_credits,
            SyllabusField::Hours => &mut self.hours,
            SyllabusField::Lectures => &mut self.lectures,
            SyllabusField::Practicals => &mut self.practicals,
            SyllabusField::Tutorials => &mut self.tutorials,
            SyllabusField::Projects => &mut self.projects,
            SyllabusField::MainTeacher => &mut self.main_teacher,
            SyllabusField::TeachingTeam => &mut self.teaching_team,
            SyllabusField::TeachingMethod => &mut self.teaching_method,
            SyllabusField::Language => &mut self.language,
            SyllabusField::Objectives => &mut self.objectives,
            SyllabusField::Prerequisites => &mut self.prerequisites,
            SyllabusField::Content => &mut self.content,
            SyllabusField::Skills => &mut self.skills,
            SyllabusField::Evaluation => &mut self.evaluation,
            SyllabusField::References => &mut self.references,
        };
        *slot = value;
    }

    /// Storage identifier in the `syllabus_<course>_<uuid>` shape the original
    /// store used.
    pub fn storage_key(&self) -> String {
        let slug: String = self
            .course_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("syllabus_{}_{}", slug, Uuid::new_v4())
    }
}
