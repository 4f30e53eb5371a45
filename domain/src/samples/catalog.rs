//! Sample catalogue: a placeholder, two real-world batch jobs and a custom entry

use crate::core::error::DomainError;

const PLACEHOLDER_TEXT: &str =
    "// Select a sample from the dropdown above or choose 'Enter Custom JCL'";

const CUSTOM_TEXT: &str = "// Paste your JCL here...";

const DAILY_ANNUITY_JCL: &str = r#"//DAILYPRC JOB (ACCT),'DAILY ANNUITY PROCESS',CLASS=A,MSGCLASS=X
//********************************************************************
//* DAILY ANNUITY PROCESSING - AIG USA
//* BASELINE: 6 HOUR BATCH WINDOW (BEFORE OPTIMIZATION)
//* PROCESSES: Premium calculations, Policy validations, Reports
//********************************************************************
//STEP01   EXEC PGM=SORT,REGION=8M
//SORTIN   DD DSN=ANNUITY.TRANS.DAILY,DISP=SHR
//SORTOUT  DD DSN=&&SORTED,DISP=(NEW,PASS),
//            SPACE=(CYL,(10,5)),UNIT=SYSDA
//SYSIN    DD *
  SORT FIELDS=(1,10,CH,A)
/*
//*
//STEP02   EXEC PGM=VALPROG,REGION=8M,COND=(0,NE,STEP01)
//INPUT    DD DSN=&&SORTED,DISP=(OLD,DELETE)
//OUTPUT   DD DSN=&&VALID,DISP=(NEW,PASS),
//            SPACE=(CYL,(10,5)),UNIT=SYSDA
//SYSOUT   DD SYSOUT=*
//*
//STEP03   EXEC PGM=CALCPREM,REGION=8M,COND=(0,NE,STEP02)
//INPUT    DD DSN=&&VALID,DISP=(OLD,DELETE)
//PREMIUM  DD DSN=PREMIUM.CALC.OUTPUT,DISP=(NEW,CATLG),
//            SPACE=(CYL,(20,10)),UNIT=SYSDA
//SYSOUT   DD SYSOUT=*
//*
//STEP04   EXEC PGM=INTEREST,REGION=8M,COND=(0,NE,STEP03)
//INPUT    DD DSN=PREMIUM.CALC.OUTPUT,DISP=SHR
//OUTPUT   DD DSN=INTEREST.CALC.OUTPUT,DISP=(NEW,CATLG),
//            SPACE=(CYL,(15,8)),UNIT=SYSDA
//*
//STEP05   EXEC PGM=RPTGEN,REGION=8M,COND=(0,NE,STEP04)
//INPUT1   DD DSN=PREMIUM.CALC.OUTPUT,DISP=SHR
//INPUT2   DD DSN=INTEREST.CALC.OUTPUT,DISP=SHR
//REPORT   DD SYSOUT=*
//SUMMARY  DD DSN=DAILY.SUMMARY.REPORT,DISP=(NEW,CATLG),
//            SPACE=(CYL,(5,2)),UNIT=SYSDA"#;

const MANUFACTURING_JCL: &str = r#"//MFGBATCH JOB (MFG),'MANUFACTURING DAILY',CLASS=A,MSGCLASS=X
//********************************************************************
//* DAILY MANUFACTURING BATCH - AUTOMOTIVE
//* PROCESSES: Parts inventory, Quality checks, Defect tracking
//********************************************************************
//STEP01   EXEC PGM=SORT,REGION=8M
//SORTIN   DD DSN=MFG.PARTS.DAILY,DISP=SHR
//SORTOUT  DD DSN=&&SORTED1,DISP=(NEW,PASS),
//            SPACE=(CYL,(15,5)),UNIT=SYSDA
//SYSIN    DD *
  SORT FIELDS=(1,8,CH,A)
/*
//*
//STEP02   EXEC PGM=SORT,REGION=8M
//SORTIN   DD DSN=MFG.QUALITY.DAILY,DISP=SHR
//SORTOUT  DD DSN=&&SORTED2,DISP=(NEW,PASS),
//            SPACE=(CYL,(15,5)),UNIT=SYSDA
//SYSIN    DD *
  SORT FIELDS=(1,8,CH,A)
/*
//*
//STEP03   EXEC PGM=QCCHECK,REGION=8M,COND=(0,NE,STEP01)
//INPUT    DD DSN=&&SORTED1,DISP=(OLD,DELETE)
//OUTPUT   DD DSN=&&QCPASS,DISP=(NEW,PASS),
//            SPACE=(CYL,(10,5)),UNIT=SYSDA
//FAILED   DD DSN=QC.FAILED.PARTS,DISP=(NEW,CATLG),
//            SPACE=(CYL,(5,2)),UNIT=SYSDA
//*
//STEP04   EXEC PGM=DEFECT,REGION=8M,COND=(0,NE,STEP02)
//INPUT    DD DSN=&&SORTED2,DISP=(OLD,DELETE)
//OUTPUT   DD DSN=&&DEFECTS,DISP=(NEW,PASS),
//            SPACE=(CYL,(10,5)),UNIT=SYSDA
//*
//STEP05   EXEC PGM=INVUPD,REGION=8M,COND=(0,NE,STEP03)
//QCPASS   DD DSN=&&QCPASS,DISP=(OLD,DELETE)
//INVENTORY DD DSN=MFG.MASTER.INVENTORY,DISP=SHR
//OUTPUT   DD DSN=MFG.INVENTORY.UPDATED,DISP=(NEW,CATLG),
//            SPACE=(CYL,(20,10)),UNIT=SYSDA
//*
//STEP06   EXEC PGM=RPTGEN,REGION=8M,COND=(0,NE,STEP04)
//DEFECTS  DD DSN=&&DEFECTS,DISP=(OLD,DELETE)
//REPORT   DD SYSOUT=*
//SUMMARY  DD DSN=MFG.DAILY.SUMMARY,DISP=(NEW,CATLG),
//            SPACE=(CYL,(5,2)),UNIT=SYSDA"#;

/// An entry in the sample selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JclSample {
    /// Nothing chosen yet; the text area is read-only
    #[default]
    Placeholder,
    DailyAnnuity,
    Manufacturing,
    /// Free-form entry
    Custom,
}

impl JclSample {
    /// All entries in selector order
    pub fn all() -> [JclSample; 4] {
        [
            JclSample::Placeholder,
            JclSample::DailyAnnuity,
            JclSample::Manufacturing,
            JclSample::Custom,
        ]
    }

    /// Samples that carry real job control text
    pub fn loadable() -> [JclSample; 2] {
        [JclSample::DailyAnnuity, JclSample::Manufacturing]
    }

    /// Stable identifier used in URLs and CLI flags
    pub fn id(&self) -> &'static str {
        match self {
            JclSample::Placeholder => "none",
            JclSample::DailyAnnuity => "annuity",
            JclSample::Manufacturing => "manufacturing",
            JclSample::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JclSample::Placeholder => "⚠️ Select a sample to load...",
            JclSample::DailyAnnuity => "🏦 Daily Annuity Processing (Financial)",
            JclSample::Manufacturing => "🏭 Manufacturing Batch (Automotive)",
            JclSample::Custom => "✏️ Enter Custom JCL",
        }
    }

    /// Text loaded into the input area when this entry is selected
    pub fn default_text(&self) -> &'static str {
        match self {
            JclSample::Placeholder => PLACEHOLDER_TEXT,
            JclSample::DailyAnnuity => DAILY_ANNUITY_JCL,
            JclSample::Manufacturing => MANUFACTURING_JCL,
            JclSample::Custom => CUSTOM_TEXT,
        }
    }

    /// Whether the input area accepts edits for this entry
    pub fn is_editable(&self) -> bool {
        !matches!(self, JclSample::Placeholder)
    }
}

impl std::fmt::Display for JclSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for JclSample {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JclSample::all()
            .into_iter()
            .find(|sample| sample.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownSample(s.to_string()))
    }
}
