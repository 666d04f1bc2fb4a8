use crate::workflows::appraisal::document::{DocTable, ReportDocument};
use crate::workflows::appraisal::domain::FacultyRecord;
use crate::workflows::appraisal::sheet::{
    extract_for, find_header_row, Extraction, InMemorySheetSource, SheetSource, SheetTable,
    NAME_ALIASES,
};

pub(super) const FACULTY_NAME: &str = "Dr. A. Sharma";

pub(super) fn faculty() -> FacultyRecord {
    FacultyRecord {
        name: FACULTY_NAME.to_string(),
        designation: "Professor".to_string(),
        department: "Computer Science".to_string(),
        employee_id: "EMP-042".to_string(),
    }
}

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Full workbook covering every category, with a preamble row above the
/// journal header to exercise the locator and a blank name cell to exercise
/// forward-fill.
pub(super) fn sample_workbook() -> InMemorySheetSource {
    InMemorySheetSource::new()
        .with_sheet(
            "Journal Publication",
            grid(&[
                &["Annexure I", "", "", "", "", "", ""],
                &[
                    "Faculty Name",
                    "Paper Title",
                    "Journal Name",
                    "Year of Publication",
                    "ISSN",
                    "Web Link",
                    "Impact Factor",
                ],
                &[
                    FACULTY_NAME,
                    "Deep Learning Pipelines",
                    "Journal of ML",
                    "2024",
                    "1234-5678",
                    "http://a",
                    "3.5",
                ],
                &[
                    "",
                    "Graph Methods",
                    "IEEE Transactions",
                    "2023",
                    "2345-6789",
                    "http://b",
                    "1.2",
                ],
                &[
                    "Dr. Someone Else",
                    "Unrelated Paper",
                    "Journal X",
                    "2023",
                    "",
                    "",
                    "4.0",
                ],
            ]),
        )
        .with_sheet(
            "Book Publication",
            grid(&[
                &[
                    "Faculty Name",
                    "Book Title",
                    "Publication Name",
                    "Date of Publication",
                    "ISBN",
                    "Description",
                ],
                &[
                    FACULTY_NAME,
                    "Systems in Rust",
                    "TechPress",
                    "2024",
                    "978-1-11111-111-1",
                    "Textbook",
                ],
            ]),
        )
        .with_sheet(
            "Conferences",
            grid(&[
                &[
                    "Faculty Name",
                    "Paper Title",
                    "Organized By",
                    "From Date",
                    "Place",
                    "Role",
                    "Conference Type",
                ],
                &[
                    FACULTY_NAME,
                    "Edge Inference",
                    "ACM",
                    "2024-02-01",
                    "Vienna",
                    "Presenter",
                    "International",
                ],
                &[
                    FACULTY_NAME,
                    "Applied Scheduling",
                    "CSI",
                    "2024-03-10",
                    "Chennai",
                    "Presenter",
                    "National",
                ],
            ]),
        )
        .with_sheet(
            "Research Grant",
            grid(&[
                &[
                    "Faculty Name",
                    "Coordinator",
                    "Title",
                    "Type",
                    "Funding Agent",
                    "Amount",
                    "Applied On",
                ],
                &[
                    FACULTY_NAME,
                    "Applied",
                    "Smart Grid Analytics",
                    "Sponsored",
                    "DST",
                    "2500000",
                    "2024-01-15",
                ],
                &[
                    FACULTY_NAME,
                    "Principal",
                    "Faculty Seminar Series",
                    "Seminar",
                    "AICTE",
                    "120000",
                    "2024-02-20",
                ],
            ]),
        )
        .with_sheet(
            "Patents",
            grid(&[
                &["Faculty Name", "Title", "Date", "Status"],
                &[FACULTY_NAME, "Adaptive Cache", "2024-01-01", "Filed"],
                &[FACULTY_NAME, "Stream Codec", "2024-05-01", "Published"],
            ]),
        )
        .with_sheet(
            "Workshop",
            grid(&[
                &[
                    "Faculty Name",
                    "Topic",
                    "From Date",
                    "To Date",
                    "Description",
                    "Venue",
                    "Role",
                ],
                &[FACULTY_NAME, "Rust Basics", "2024-01-05", "2024-01-06", "Intro", "Lab 1", "Attended"],
                &[FACULTY_NAME, "Async IO", "2024-02-05", "2024-02-06", "Advanced", "Lab 2", "Attended"],
                &[FACULTY_NAME, "Databases", "2024-03-05", "2024-03-06", "Survey", "Lab 3", "Attended"],
                &[FACULTY_NAME, "Networking", "2024-04-05", "2024-04-06", "Survey", "Lab 4", "Attended"],
            ]),
        )
        .with_sheet(
            "Faculty Internship",
            grid(&[
                &[
                    "Faculty Name",
                    "FDP Name",
                    "From Date",
                    "To Date",
                    "Description",
                    "National or International",
                ],
                &[
                    FACULTY_NAME,
                    "Industry FDP",
                    "2024-05-01",
                    "2024-05-14",
                    "Placement",
                    "National",
                ],
            ]),
        )
        .with_sheet(
            "MOOC Course",
            grid(&[
                &[
                    "Faculty Name",
                    "Coure Title",
                    "Course Type",
                    "From Date",
                    "To Date",
                    "Duration",
                    "Awards",
                ],
                &[FACULTY_NAME, "Distributed Systems", "NPTEL", "2024-01-01", "2024-03-01", "8 weeks", "Elite"],
                &[FACULTY_NAME, "Compilers", "NPTEL", "2024-02-01", "2024-04-01", "8 weeks", "-"],
                &[FACULTY_NAME, "Algorithms", "Coursera", "2024-03-01", "2024-05-01", "6 weeks", "-"],
            ]),
        )
        .with_sheet(
            "MoU",
            grid(&[
                &[
                    "Faculty Name",
                    "Company Name",
                    "From Date",
                    "To Date",
                    "Industry SPOC",
                    "Duration",
                ],
                &[FACULTY_NAME, "Acme Robotics", "2024-01-01", "2025-01-01", "J. Doe", "1 year"],
            ]),
        )
        .with_sheet(
            "Workshops",
            grid(&[
                &[
                    "Faculty Name",
                    "Topic",
                    "Department",
                    "From Date",
                    "To Date",
                    "No of Students",
                    "Venue",
                    "Description",
                    "Role",
                ],
                &[FACULTY_NAME, "Git Workflow", "CSE", "2024-02-01", "2024-02-01", "60", "Hall A", "Hands-on", "Conducted"],
                &[FACULTY_NAME, "CI Pipelines", "CSE", "2024-03-01", "2024-03-01", "45", "Hall B", "Hands-on", "Conducted"],
                &[FACULTY_NAME, "Cloud Intro", "CSE", "2024-04-01", "2024-04-01", "50", "Hall C", "Hands-on", "Attended"],
            ]),
        )
        .with_sheet(
            "Guest Lectures",
            grid(&[
                &[
                    "Faculty Name",
                    "Chief Guest Name",
                    "Address",
                    "Topic Name",
                    "From Date",
                    "To Date",
                    "Description",
                    "Topic Delivered",
                ],
                &[
                    FACULTY_NAME,
                    "Dr. V. Rao",
                    "Bengaluru",
                    "Industry 4.0",
                    "2024-06-01",
                    "2024-06-01",
                    "Invited talk",
                    "Automation",
                ],
            ]),
        )
        .with_sheet(
            "Project Guided or Mentoring",
            grid(&[
                &[
                    "Faculty Name",
                    "Project Title",
                    "Number of Students",
                    "Title of Hackathon",
                    "Organized By",
                    "Date",
                    "Status",
                ],
                &[FACULTY_NAME, "Smart Campus", "4", "SIH 2024", "AICTE", "2024-08-01", "Finalist"],
                &[FACULTY_NAME, "AgriTech", "3", "-", "College", "2024-09-01", "Ongoing"],
            ]),
        )
}

/// Scores document for the academics category: three data rows then the
/// Total/Average marker row.
pub(super) fn academics_source() -> ReportDocument {
    let mut table = DocTable::with_rows(6, 10);
    let data = [
        ["", "", "", "", "45", "1", "2", "0", "5", "0"],
        ["", "", "", "", "46", "1", "2", "0", "5", "0"],
        ["", "", "", "", "47", "1", "1", "0", "2", "0"],
    ];
    for (offset, row) in data.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            table.rows[2 + offset].cells[col].set_text(*value);
        }
    }
    table.rows[5].cells[0].set_text("Total/Average");

    ReportDocument {
        paragraphs: Vec::new(),
        tables: vec![DocTable::with_rows(2, 4), table],
    }
}

/// Header-located, name-filtered extraction for one sheet, the way the
/// engine prepares rule input.
pub(super) fn extraction_for(source: &dyn SheetSource, sheet: &str) -> Extraction {
    let skip = find_header_row(source, sheet).unwrap_or(0);
    let table = SheetTable::from_grid(source.rows(sheet, skip, None).expect("sheet readable"));
    extract_for(&table, &NAME_ALIASES, FACULTY_NAME).expect("name column resolves")
}
