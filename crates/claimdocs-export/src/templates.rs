//! The four fixed document scripts.
//!
//! Each document is a table of paragraph descriptors. Text is either a
//! literal or a sequence of literal pieces and client fields; there is no
//! other template syntax.

use claimdocs_core::client::ClientDetails;
use claimdocs_core::document_type::DocumentType;
use jiff::civil::Date;

use crate::document::{Block, BlockStyle, Document};
use crate::error::ExportError;

use BlockStyle::{Body, Bold, Dateline, Heading, Signature};
use Piece::{Email, IdNumber, Lit, Name, NameUpper, Phone, Today};

#[derive(Debug, Clone, Copy)]
enum Piece {
    Lit(&'static str),
    Name,
    /// Client name upper-cased, for the addressed-party line.
    NameUpper,
    Email,
    Phone,
    IdNumber,
    Today,
}

#[derive(Debug, Clone, Copy)]
enum Line {
    Text(BlockStyle, &'static str),
    Fill(BlockStyle, &'static [Piece]),
}

const BLANK: Line = Line::Text(Body, "");
const DATE_LINE: Line = Line::Fill(Dateline, &[Lit("Date: "), Today]);
const SIGNATURE_RULE: Line = Line::Text(Signature, "________________________");

const DETAIL_ROWS: &[Line] = &[
    Line::Fill(Body, &[Lit("Full Name: "), Name]),
    Line::Fill(Body, &[Lit("ID Number: "), IdNumber]),
    Line::Fill(Body, &[Lit("Email: "), Email]),
    Line::Fill(Body, &[Lit("Phone: "), Phone]),
];

const CLIENT_DETAILS_HEADER: &[Line] = &[BLANK, Line::Text(Bold, "CLIENT DETAILS:")];

const CLIENT_SIGN_OFF: &[Line] = &[
    SIGNATURE_RULE,
    Line::Fill(Body, &[Name]),
    Line::Text(Body, "CLIENT SIGNATURE"),
];

const FIRM_SIGN_OFF: &[Line] = &[
    BLANK,
    Line::Text(Body, "[LAW FIRM NAME]"),
    Line::Text(Body, "Attorneys for Plaintiff"),
];

const WARRANT_BODY: &[Line] = &[
    Line::Text(Heading, "WARRANT TO ACT"),
    DATE_LINE,
    Line::Text(Bold, "TO: [LAW FIRM NAME]"),
    BLANK,
    Line::Text(Bold, "RE: MOTOR VEHICLE ACCIDENT CLAIM"),
    BLANK,
    Line::Fill(
        Body,
        &[
            Lit("I, "),
            Name,
            Lit(", holder of ID Number "),
            IdNumber,
            Lit(
                ", hereby authorize and instruct you to act on my behalf in connection \
                 with my motor vehicle accident claim.",
            ),
        ],
    ),
    Line::Text(Body, "I hereby warrant and authorize you to:"),
    Line::Text(Body, "1. Investigate the circumstances of the accident"),
    Line::Text(Body, "2. Obtain all necessary medical reports and documentation"),
    Line::Text(Body, "3. Negotiate with insurance companies and third parties"),
    Line::Text(Body, "4. Institute legal proceedings if necessary"),
    Line::Text(Body, "5. Take all steps necessary to recover damages on my behalf"),
];

const WARRANT_CLOSING: &[Line] = &[
    BLANK,
    Line::Text(
        Body,
        "I confirm that I have read and understood the terms of this warrant.",
    ),
];

const CONSENT_BODY: &[Line] = &[
    Line::Text(Heading, "CONSENT FOR RELEASE OF MEDICAL INFORMATION"),
    DATE_LINE,
    Line::Text(Bold, "TO: ALL MEDICAL PRACTITIONERS AND HEALTHCARE PROVIDERS"),
    BLANK,
    Line::Fill(
        Body,
        &[
            Lit("I, "),
            Name,
            Lit(", ID Number "),
            IdNumber,
            Lit(
                ", hereby give my full and informed consent for the release of all medical \
                 information, reports, records, and documentation relating to my treatment \
                 following the motor vehicle accident.",
            ),
        ],
    ),
    Line::Text(Body, "This consent specifically authorizes the release of:"),
    Line::Text(Body, "1. All medical reports and clinical notes"),
    Line::Text(Body, "2. Diagnostic test results including X-rays, MRI, CT scans"),
    Line::Text(Body, "3. Treatment records and rehabilitation reports"),
    Line::Text(Body, "4. Specialist consultation reports"),
    Line::Text(Body, "5. Any other medical documentation relevant to my claim"),
    BLANK,
    Line::Text(Body, "This information may be released to:"),
    Line::Text(Body, "\u{2022} My legal representatives"),
    Line::Text(Body, "\u{2022} Insurance companies involved in the claim"),
    Line::Text(Body, "\u{2022} Medical experts appointed for assessment"),
    Line::Text(Body, "\u{2022} Court officials if legal proceedings are instituted"),
];

const CONSENT_CLOSING: &[Line] = &[
    BLANK,
    Line::Text(
        Body,
        "I understand that this consent remains valid until revoked by me in writing.",
    ),
];

const DEMAND_BODY: &[Line] = &[
    Line::Text(Heading, "LETTER OF DEMAND"),
    DATE_LINE,
    Line::Text(Bold, "TO: [THIRD PARTY/INSURANCE COMPANY]"),
    BLANK,
    Line::Text(Bold, "RE: MOTOR VEHICLE ACCIDENT - CLAIM FOR DAMAGES"),
    Line::Fill(Bold, &[Lit("OUR CLIENT: "), NameUpper]),
    BLANK,
    Line::Text(
        Body,
        "We act on behalf of the above-named client in connection with a motor vehicle \
         accident that occurred on [DATE] at [LOCATION].",
    ),
    Line::Text(Bold, "FACTS:"),
    Line::Text(
        Body,
        "Our client was involved in a motor vehicle accident caused by the negligent \
         driving of your insured. As a result of this accident, our client sustained \
         injuries and suffered damages.",
    ),
    BLANK,
    Line::Text(Bold, "DAMAGES CLAIMED:"),
    Line::Text(
        Body,
        "1. General damages for pain, suffering and loss of amenities of life",
    ),
    Line::Text(Body, "2. Medical expenses incurred and to be incurred"),
    Line::Text(Body, "3. Loss of income/earning capacity"),
    Line::Text(Body, "4. Vehicle damage and related expenses"),
    Line::Text(Body, "5. Any other damages that may be proven"),
    BLANK,
    Line::Text(Bold, "DEMAND:"),
    Line::Text(
        Body,
        "We hereby demand that you settle our client's claim within 30 (thirty) days of \
         receipt of this letter. Failing settlement within the stipulated period, we shall \
         institute action against your insured without further notice.",
    ),
];

const DEMAND_CLOSING: &[Line] = &[
    BLANK,
    Line::Text(Body, "We await your urgent response."),
    BLANK,
    Line::Text(Body, "Yours faithfully,"),
];

const NOTICE_BODY: &[Line] = &[
    Line::Text(Heading, "STATUTORY NOTICE"),
    DATE_LINE,
    Line::Text(Bold, "TO: [THIRD PARTY DRIVER]"),
    BLANK,
    Line::Text(Bold, "RE: MOTOR VEHICLE ACCIDENT - STATUTORY NOTICE"),
    Line::Fill(Bold, &[Lit("PLAINTIFF: "), NameUpper]),
    BLANK,
    Line::Text(
        Body,
        "TAKE NOTICE that our client intends to institute action against you in the High \
         Court/Magistrate's Court for damages arising from a motor vehicle accident.",
    ),
    BLANK,
    Line::Text(Bold, "PARTICULARS OF CLAIM:"),
    Line::Text(Body, "Date of Accident: [DATE]"),
    Line::Text(Body, "Place of Accident: [LOCATION]"),
    Line::Text(
        Body,
        "Cause of Action: Negligent driving resulting in motor vehicle collision",
    ),
    BLANK,
    Line::Text(Bold, "NATURE OF DAMAGES:"),
    Line::Text(
        Body,
        "1. General damages for pain, suffering and loss of amenities of life",
    ),
    Line::Text(Body, "2. Special damages including medical expenses"),
    Line::Text(Body, "3. Loss of income and earning capacity"),
    Line::Text(Body, "4. Vehicle damage"),
    Line::Text(Body, "5. Interest and costs"),
    BLANK,
    Line::Text(
        Body,
        "This notice is served in terms of the relevant statutory provisions and court \
         rules. Since no amicable resolution has been forthcoming despite our previous \
         correspondence, legal proceedings will be instituted shortly.",
    ),
];

const PLAINTIFF_DETAILS_HEADER: &[Line] = &[BLANK, Line::Text(Bold, "PLAINTIFF DETAILS:")];

const NOTICE_CLOSING: &[Line] = &[
    BLANK,
    Line::Text(
        Body,
        "You are advised to forward this notice to your insurance company immediately.",
    ),
    BLANK,
    Line::Text(Body, "DATED at [CITY] on this _____ day of _________, 2024."),
];

fn script(doc_type: DocumentType) -> &'static [&'static [Line]] {
    match doc_type {
        DocumentType::Warrant => &[
            WARRANT_BODY,
            CLIENT_DETAILS_HEADER,
            DETAIL_ROWS,
            WARRANT_CLOSING,
            CLIENT_SIGN_OFF,
        ],
        DocumentType::Consent => &[
            CONSENT_BODY,
            CLIENT_DETAILS_HEADER,
            DETAIL_ROWS,
            CONSENT_CLOSING,
            CLIENT_SIGN_OFF,
        ],
        DocumentType::Demand => &[
            DEMAND_BODY,
            CLIENT_DETAILS_HEADER,
            DETAIL_ROWS,
            DEMAND_CLOSING,
            FIRM_SIGN_OFF,
        ],
        DocumentType::Notice => &[
            NOTICE_BODY,
            PLAINTIFF_DETAILS_HEADER,
            DETAIL_ROWS,
            NOTICE_CLOSING,
            FIRM_SIGN_OFF,
        ],
    }
}

struct Fields<'a> {
    details: &'a ClientDetails,
    upper_name: String,
    today: String,
}

impl Fields<'_> {
    fn text(&self, piece: Piece) -> &str {
        match piece {
            Lit(s) => s,
            Name => &self.details.name,
            NameUpper => &self.upper_name,
            Email => &self.details.email,
            Phone => &self.details.phone_number,
            IdNumber => &self.details.identification_number,
            Today => &self.today,
        }
    }
}

/// Format a date with a strftime-style pattern.
pub fn format_date(date: Date, format: &str) -> Result<String, ExportError> {
    jiff::fmt::strtime::format(format, date).map_err(|e| ExportError::DateFormat {
        format: format.to_string(),
        message: e.to_string(),
    })
}

/// Render one document for `details`, stamping it with `date`.
///
/// Output depends only on the arguments.
pub fn render(
    details: &ClientDetails,
    doc_type: DocumentType,
    date: Date,
    date_format: &str,
) -> Result<Document, ExportError> {
    let fields = Fields {
        details,
        upper_name: details.name.to_uppercase(),
        today: format_date(date, date_format)?,
    };

    let blocks = script(doc_type)
        .iter()
        .flat_map(|section| section.iter())
        .map(|line| match *line {
            Line::Text(style, text) => Block {
                style,
                text: text.to_string(),
            },
            Line::Fill(style, pieces) => Block {
                style,
                text: pieces.iter().map(|p| fields.text(*p)).collect(),
            },
        })
        .collect();

    Ok(Document { doc_type, blocks })
}
