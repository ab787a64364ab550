/// Delimiter the generator is instructed to emit between two syllabi, and the
/// literal the batch splitter cuts on.
pub const SYLLABUS_DELIMITER: &str = "---";

/// The exact field-label template the generator must follow. The extractor
/// matches these labels verbatim, so the two must never drift apart.
pub const SYLLABUS_FIELD_TEMPLATE: &str = "**Nom du Cours** : ...
**Semestre** : ...
**Crédits ECTS** : ...
**Nombre d'heures dispensées** : ...
**Cours Magistraux** : ...
**Travaux Dirigés** : ...
**Travaux Pratiques** : ...
**Projets** : ...
**Enseignant référent** : ...
**Equipe d'enseignants** : ...
**Modalité pédagogique** : ...
**Langue** : ...
**Objectifs pédagogiques** : ...
**Pré requis** : ...
**Contenu** : ...
**Compétences à acquérir** : ...
**Modalités d'évaluation** : ...
**Références externes** : ...";
