use serde_json::{Value, json};

pub fn syllabus() -> Value {
    json!({
        "type": "object",
        "properties": {
            "course_title": { "type": "string", "description": "Course title" },
            "instructor": { "type": "string", "description": "Instructor name", "nullable": true },
            "term": { "type": "string", "description": "Term or semester", "nullable": true },
            "assessments": {
                "type": "array",
                "description": "Graded items",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "type": { "type": "string" },
                        "weight_percent": { "type": "number", "nullable": true },
                        "due_date": {
                            "type": "string",
                            "description": "ISO 8601 date when known",
                            "nullable": true
                        },
                        "notes": { "type": "string", "nullable": true }
                    },
                    "required": ["name"]
                }
            },
            "weekly_topics": {
                "type": "array",
                "description": "Week-by-week outline",
                "items": {
                    "type": "object",
                    "properties": {
                        "week_number": { "type": "integer" },
                        "title": { "type": "string" },
                        "topics": { "type": "string", "nullable": true },
                        "readings": { "type": "string", "nullable": true }
                    },
                    "required": ["week_number", "title"]
                }
            }
        },
        "required": ["course_title", "assessments", "weekly_topics"]
    })
}

pub fn plan() -> Value {
    json!({
        "type": "object",
        "properties": {
            "weeks": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "week_number": { "type": "integer" },
                        "date_range": { "type": "string" },
                        "topics_to_cover": { "type": "string" },
                        "tasks": { "type": "array", "items": { "type": "string" } },
                        "estimated_time_hours": { "type": "number" },
                        "focus": { "type": "string" }
                    },
                    "required": ["week_number", "topics_to_cover", "tasks", "estimated_time_hours"]
                }
            }
        },
        "required": ["weeks"]
    })
}

pub fn practice() -> Value {
    json!({
        "type": "object",
        "properties": {
            "topic": { "type": "string" },
            "difficulty": { "type": "string" },
            "questions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string" },
                        "answer": { "type": "string", "nullable": true }
                    },
                    "required": ["question"]
                }
            },
            "flashcards": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "front": { "type": "string" },
                        "back": { "type": "string" }
                    },
                    "required": ["front", "back"]
                }
            }
        },
        "required": ["topic", "questions", "flashcards"]
    })
}

pub fn tracker() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "assignments": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "course": { "type": "string", "nullable": true },
                        "name": { "type": "string" },
                        "status": {
                            "type": "string",
                            "enum": ["missing", "submitted", "upcoming", "late"]
                        },
                        "weight_percent": { "type": "number", "nullable": true },
                        "due_date": { "type": "string", "nullable": true },
                        "notes": { "type": "string", "nullable": true },
                        "priority_score": {
                            "type": "number",
                            "description": "Higher means more urgent",
                            "nullable": true
                        },
                        "recommended_action": { "type": "string", "nullable": true }
                    },
                    "required": ["name", "status"]
                }
            },
            "today_focus": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["summary", "assignments"]
    })
}
