use super::{Category, Project};

/// The projects a fresh board starts with.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            1,
            "AI Chatbot",
            "Develop an AI-powered chatbot for customer service",
            Category::Python,
        ),
        Project::new(
            2,
            "E-commerce Platform",
            "Build a scalable e-commerce website with React",
            Category::WebDev,
        ),
        Project::new(
            3,
            "Mobile RPG",
            "Create a mobile role-playing game with Unity",
            Category::GameDev,
        ),
        Project::new(
            4,
            "Smart Home App",
            "Design an app to control smart home devices",
            Category::Uncategorized,
        ),
        Project::new(
            5,
            "Data Visualization Tool",
            "Develop a tool for creating interactive data visualizations",
            Category::Python,
        ),
        Project::new(
            6,
            "Social Media Dashboard",
            "Create a dashboard to manage multiple social media accounts",
            Category::WebDev,
        ),
        Project::new(
            7,
            "Augmented Reality Game",
            "Develop an AR game for mobile devices",
            Category::GameDev,
        ),
        Project::new(
            8,
            "Productivity Tracker",
            "Build a cross-platform app to track personal and team productivity",
            Category::Uncategorized,
        ),
    ]
}
