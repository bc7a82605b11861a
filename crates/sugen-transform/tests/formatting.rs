//! End-to-end transform and render checks against known layouts.

use sugen_model::{CellValue, Table};
use sugen_output::{WriteOptions, render_delimited_table};
use sugen_transform::{
    PHENOTYPE_DELIMITER, PHENOTYPE_MISSING_VALUE, PhenotypeColumns, RESULTS_DELIMITER,
    RESULTS_MISSING_VALUE, format_phenotypes, format_results, parse_covariates,
};

fn table(header: &[&str], rows: &[&[Option<&str>]]) -> Table {
    let mut table = Table::new(header.iter().map(|name| (*name).to_string()).collect());
    for row in rows {
        table
            .push_row(
                row.iter()
                    .map(|cell| cell.map_or(CellValue::Missing, CellValue::text))
                    .collect(),
            )
            .unwrap();
    }
    table
}

fn render(table: &Table, delimiter: u8, missing: &str) -> String {
    let bytes = render_delimited_table(table, &WriteOptions::new(delimiter, missing)).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn phenotype_scenario() {
    let input = table(
        &["ID", "Y", "X", "AGE", "SEX"],
        &[&[Some("1"), Some("2.5"), Some("0.1"), Some("30"), Some("M")]],
    );
    let columns = PhenotypeColumns::new("ID", "Y", "X").with_covariates(parse_covariates("AGE SEX"));

    let output = render(
        &format_phenotypes(&input, &columns).unwrap(),
        PHENOTYPE_DELIMITER,
        PHENOTYPE_MISSING_VALUE,
    );

    assert_eq!(output, "ID\tY\tX\tAGE\tSEX\n1\t2.5\t0.1\t30\tM\n");
}

#[test]
fn phenotype_missing_cells_render_as_na() {
    let input = table(
        &["IID", "BMI", "SMOKE", "PC1"],
        &[
            &[Some("s1"), None, Some("1"), Some("0.02")],
            &[Some("s2"), Some("27.1"), None, None],
        ],
    );
    let columns = PhenotypeColumns::new("IID", "BMI", "SMOKE").with_covariates(vec!["PC1".into()]);

    let output = render(
        &format_phenotypes(&input, &columns).unwrap(),
        PHENOTYPE_DELIMITER,
        PHENOTYPE_MISSING_VALUE,
    );

    assert_eq!(
        output,
        "IID\tBMI\tSMOKE\tPC1\ns1\tNA\t1\t0.02\ns2\t27.1\tNA\tNA\n"
    );
}

#[test]
fn results_layout() {
    let input = table(
        &[
            "VCF_ID",
            "CHROM",
            "POS",
            "REF",
            "ALT",
            "BETA_G:AGE",
            "SE_G:AGE",
            "COV_G:AGE_G:AGE",
            "PVALUE_INTER",
            "PVALUE_BOTH",
        ],
        &[
            &[
                Some("1:1000:A:G"),
                Some("1"),
                Some("1000"),
                Some("A"),
                Some("G"),
                Some("0.0123"),
                Some("0.004"),
                Some("1.6e-05"),
                Some("0.002"),
                Some("0.0005"),
            ],
            &[
                Some("1:2000:C:T"),
                Some("1"),
                Some("2000"),
                Some("C"),
                Some("T"),
                None,
                None,
                None,
                Some("0.9"),
                None,
            ],
        ],
    );

    let output = render(
        &format_results(input, "AGE").unwrap(),
        RESULTS_DELIMITER,
        RESULTS_MISSING_VALUE,
    );

    insta::assert_snapshot!(output, @r"
    SNPID Allele1 Allele2 Beta_Interaction_1 Var_Beta_Interaction_1_1 P_Value_Interaction P_Value_Joint
    1:1000:A:G A G 0.0123 1.6e-05 0.002 0.0005
    1:2000:C:T C T NaN NaN 0.9 NaN
    ");
}

#[test]
fn results_with_missing_source_column_fail() {
    let input = table(&["VCF_ID", "REF", "ALT"], &[]);
    let err = format_results(input, "AGE").unwrap_err();
    assert!(err.to_string().contains("'PVALUE_BOTH' (for P_Value_Joint)"));
}
