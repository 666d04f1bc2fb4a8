use appraisal::workflows::appraisal::document::DocParagraph;
use appraisal::workflows::appraisal::layout::{self, tables};
use appraisal::workflows::appraisal::{
    AppraisalEngine, AppraisalInputs, FacultyRecord, InMemorySheetSource, ReportDocument,
};

const NAME: &str = "Dr. K. Iyer";

fn faculty() -> FacultyRecord {
    FacultyRecord {
        name: NAME.to_string(),
        designation: "Professor".to_string(),
        department: "Mechanical".to_string(),
        employee_id: "EMP-007".to_string(),
    }
}

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn workbook() -> InMemorySheetSource {
    InMemorySheetSource::new()
        .with_sheet(
            "Journal Publication",
            grid(&[
                &["Circular", "", "", "", "", "", ""],
                &[
                    "Faculty Name",
                    "Paper Title",
                    "Journal Name",
                    "Year of Publication",
                    "ISSN",
                    "Web Link",
                    "Impact Factor",
                ],
                &[NAME, "Thermal Modelling", "J. Heat Transfer", "2024", "1111-2222", "-", "3.5"],
                &["", "Composite Fatigue", "Materials Letters", "2023", "3333-4444", "-", "1.2"],
            ]),
        )
        .with_sheet(
            "Patents",
            grid(&[
                &["Faculty Name", "Title", "Date", "Status"],
                &[NAME, "Heat Exchanger Fin", "2024-03-01", "Filed"],
                &[NAME, "Micro Turbine", "2024-06-01", "Published"],
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
                &[NAME, "Applied", "Green Foundry", "Sponsored", "DST", "2500000", "2024-01-10"],
                &[NAME, "Principal", "Design Symposium", "Seminar", "AICTE", "120000", "2024-02-12"],
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
                &[NAME, "CAD Refresher", "2024-01-05", "2024-01-06", "-", "Lab 1", "Attended"],
                &[NAME, "FEM Tools", "2024-02-05", "2024-02-06", "-", "Lab 2", "Attended"],
                &[NAME, "CAM Basics", "2024-03-05", "2024-03-06", "-", "Lab 3", "Attended"],
                &[NAME, "Metrology", "2024-04-05", "2024-04-06", "-", "Lab 4", "Attended"],
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
                &[NAME, "EV Retrofit", "5", "SIH 2024", "AICTE", "2024-08-01", "Winner"],
                &[NAME, "Drone Frame", "3", "-", "College", "2024-09-01", "Ongoing"],
            ]),
        )
}

fn academics_source() -> ReportDocument {
    let mut document = ReportDocument::default();
    document.tables = (0..2)
        .map(|_| appraisal::workflows::appraisal::document::DocTable::with_rows(6, 10))
        .collect();

    let data = [
        ["", "", "", "", "45", "1", "2", "0", "5", "0"],
        ["", "", "", "", "46", "1", "2", "0", "5", "0"],
        ["", "", "", "", "47", "1", "1", "0", "2", "0"],
    ];
    for (offset, row) in data.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            document.tables[1].rows[2 + offset].cells[col].set_text(*value);
        }
    }
    document.tables[1].rows[5].cells[0].set_text("Total/Average");
    document
}

fn run(source: &InMemorySheetSource) -> appraisal::workflows::appraisal::AppraisalOutcome {
    let faculty = faculty();
    let mut template = layout::standard_template();
    template
        .paragraphs
        .push(DocParagraph::new("{{name}} ({{empid}}): research {{research}}, academics {{academics}}"));

    AppraisalEngine::new().run(AppraisalInputs {
        faculty: &faculty,
        source,
        primary_template: template,
        corrective_template: layout::standard_corrective_template(),
        academics_source: Some(academics_source()),
    })
}

#[test]
fn full_run_accumulates_every_bucket() {
    let outcome = run(&workbook());
    let buckets = outcome.summary.buckets;

    // Journals 8, patents 5, grants 4, seminars 2.
    assert_eq!(buckets.research, 19.0);
    // Four workshops attended, capped at 3.
    assert_eq!(buckets.self_development, 3.0);
    // Mentoring is a fixed 1 regardless of row count.
    assert_eq!(buckets.mentoring, 1.0);
    assert_eq!(buckets.academics, 4.0);
    assert_eq!(buckets.leadership, 0.0);
    assert_eq!(buckets.truncated_total(), 27);
}

#[test]
fn counters_mirror_the_category_contributions() {
    let outcome = run(&workbook());
    let counters = &outcome.summary.counters;

    assert_eq!(counters["r2_1"], 3.0);
    assert_eq!(counters["r4_1"], 1.0);
    assert_eq!(counters["r10_1"], 4.0);
    assert_eq!(counters["r11_1"], 2.0);
    assert_eq!(counters["r12_1"], 5.0);
    assert_eq!(counters["p1_1"], 3.0);
    assert_eq!(counters["s1_1"], 1.0);
    // Slots nothing feeds stay at zero.
    assert_eq!(counters["r13_1"], 0.0);
    assert_eq!(counters["p5_1"], 0.0);
}

#[test]
fn weighted_total_follows_the_professor_vector() {
    let outcome = run(&workbook());
    let weighted = &outcome.summary.weighted;

    assert_eq!(weighted.weights, [0.1, 0.4, 0.2, 0.2, 0.1]);
    // 4*0.1 + 19*0.4 + 3*0.2 + 1*0.2 + 0*0.1
    assert!((weighted.total - 8.8).abs() < 1e-9);
}

#[test]
fn totals_rows_match_the_declared_aggregates() {
    let outcome = run(&workbook());

    let journal_total = outcome
        .primary
        .table(tables::JOURNALS)
        .and_then(|table| table.rows.last())
        .and_then(|row| row.cells.last())
        .map(|cell| cell.text())
        .expect("journal totals cell");
    assert_eq!(journal_total, "8");

    let patents_total = outcome
        .primary
        .table(tables::PATENTS)
        .and_then(|table| table.rows.last())
        .and_then(|row| row.cells.last())
        .map(|cell| cell.text())
        .expect("patent totals cell");
    assert_eq!(patents_total, "5");
}

#[test]
fn placeholders_render_into_the_primary_document() {
    let outcome = run(&workbook());
    assert_eq!(
        outcome.primary.paragraphs[0].text,
        "Dr. K. Iyer (EMP-007): research 19, academics 4"
    );
}

#[test]
fn absent_sheets_contribute_exactly_zero_without_errors() {
    let faculty = faculty();
    let empty = InMemorySheetSource::new();
    let outcome = AppraisalEngine::new().run(AppraisalInputs {
        faculty: &faculty,
        source: &empty,
        primary_template: layout::standard_template(),
        corrective_template: layout::standard_corrective_template(),
        academics_source: None,
    });

    let buckets = outcome.summary.buckets;
    assert_eq!(buckets.research, 0.0);
    assert_eq!(buckets.self_development, 0.0);
    assert_eq!(buckets.mentoring, 0.0);
    assert_eq!(buckets.academics, 0.0);
    assert_eq!(outcome.summary.weighted.total, 0.0);
}

#[test]
fn detail_rows_grow_the_template_tables() {
    let outcome = run(&workbook());
    let table = outcome
        .primary
        .table(tables::WORKSHOPS_ATTENDED)
        .expect("workshop table");
    // Two heading rows + four detail rows + the totals row.
    assert_eq!(table.rows.len(), 7);
}
