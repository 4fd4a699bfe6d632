//! Cours, Quiz and catalogue entity <-> model mapper

use campus_core::entities::{Course, Cours, Event, Quiz, TypeContenu};

use crate::models::{CourseModel, CoursModel, EventModel, QuizModel};

/// Convert database content type string; unknown values are dropped
fn parse_type_contenu(value: Option<&str>) -> Option<TypeContenu> {
    value.and_then(TypeContenu::parse)
}

impl From<CoursModel> for Cours {
    fn from(model: CoursModel) -> Self {
        Cours {
            id: model.id,
            type_contenu: parse_type_contenu(model.type_contenu.as_deref()),
            titre: model.titre,
            description: model.description,
            date_publication: model.date_publication,
            date_creation: model.date_creation,
            visibilite: model.visibilite,
            contenu: model.contenu,
            url_contenu: model.url_contenu,
        }
    }
}

impl From<QuizModel> for Quiz {
    fn from(model: QuizModel) -> Self {
        Quiz {
            id: model.id,
            cours_id: model.cours_id,
            titre: model.titre,
            description: model.description,
            questions: model.questions.0,
            date_creation: model.date_creation,
            date_echeance: model.date_echeance,
            duree: model.duree,
            score_max: model.score_max,
            tentatives: model.tentatives,
        }
    }
}

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            title: model.title,
            description: model.description,
            date_creation: model.date_creation,
            enabled: model.enabled,
        }
    }
}

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            titre: model.titre,
            description: model.description,
            lieu: model.lieu,
            date_evenement: model.date_evenement,
            enabled: model.enabled,
        }
    }
}
