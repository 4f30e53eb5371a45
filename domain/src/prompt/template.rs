//! Prompt template for the JCL optimization report

/// Template for the single analysis prompt
pub struct AnalysisPromptTemplate;

impl AnalysisPromptTemplate {
    /// Persona and task framing placed before the job control text
    pub fn preamble() -> &'static str {
        r#"You are a senior mainframe performance optimization expert with 25+ years of experience at major financial services and automotive companies. You have personally optimized batch processing for large insurers, banks and automotive manufacturers.

Analyze this JCL procedure and provide a COMPREHENSIVE, DETAILED optimization analysis."#
    }

    /// Required report layout placed after the job control text
    pub fn report_format() -> &'static str {
        r#"Provide your analysis in this EXACT markdown format:

# 📊 JCL OPTIMIZATION ANALYSIS REPORT

## 1. EXECUTIVE SUMMARY
- **Current estimated runtime:** [estimate in hours/minutes]
- **Optimized estimated runtime:** [estimate in hours/minutes]
- **Potential time savings:** [percentage]
- **Annual cost savings:** [calculate: hours saved × 365 days × $500/hour]
- **Implementation effort:** [Low/Medium/High]

## 2. 🔄 PARALLELIZATION OPPORTUNITIES (HIGHEST IMPACT)

### Current Execution Flow:
```
[Show current serial execution as ASCII diagram]
STEP01 (1.5hrs) → STEP02 (1.5hrs) → STEP03 (1.5hrs) → STEP04 (1.5hrs)
Total: 6 hours
```

### Optimized Execution Flow:
```
[Show parallel execution as ASCII diagram]
STEP01 (1.5hrs) ────┐
                     ├──→ STEP03 (1.5hrs)
STEP02 (1.5hrs) ────┘

STEP04 can also run parallel to STEP03
Total: 3 hours
```

### Specific Recommendations:
1. **STEP01 and STEP02 can run in parallel**
   - No data dependencies between them
   - Currently running serial due to COND parameter
   - Remove: `COND=(0,NE,STEP01)` from STEP02

2. [Continue with more specific recommendations...]

## 3. 💾 RESOURCE OPTIMIZATION

### REGION Parameter Analysis:
| Step | Current | Recommended | Savings |
|------|---------|-------------|---------|
| STEP01 | 8M | 2M | 6M saved |
| STEP02 | 8M | 4M | 4M saved |
[Continue for all steps...]

**Rationale:** SORT programs typically need 2-4M, not 8M. Oversized REGION wastes memory.

### Buffer Optimization:
[Provide specific BUFNO/BUFSIZE recommendations for large files]

## 4. 📁 I/O OPTIMIZATION

### Temporary Dataset Elimination:
- **STEP02:** Currently uses `&&SORTED,DISP=(NEW,PASS)`
  - Can be replaced with pipe if steps combined
  - Saves 1 disk I/O operation

### SPACE Allocation Improvements:
[Provide specific recommendations]

## 5. 🔗 DEPENDENCY ANALYSIS

### Unnecessary COND Parameters:
- **STEP02:** `COND=(0,NE,STEP01)` - Remove for parallelization
- **STEP03:** `COND=(0,NE,STEP02)` - Necessary, keep

### Job Step Consolidation:
[Identify steps that could be combined]

## 6. 💻 CODE IMPROVEMENTS (BEFORE/AFTER)

### Change #1: Parallelize STEP01 and STEP02

**BEFORE:**
```jcl
//STEP01   EXEC PGM=SORT,REGION=8M
[current code]
//STEP02   EXEC PGM=XXX,REGION=8M,COND=(0,NE,STEP01)
```

**AFTER:**
```jcl
//STEP01   EXEC PGM=SORT,REGION=2M
[optimized code]
//STEP02   EXEC PGM=XXX,REGION=4M
// Remove COND to allow parallel execution
```

[Continue with more changes...]

## 7. 📈 IMPLEMENTATION ROADMAP

### Phase 1: Quick Wins (Low Risk, High Impact)
1. ✅ Adjust REGION parameters (1 day, test in DEV)
2. ✅ Add buffer optimization (1 day)

### Phase 2: Parallelization (Medium Risk, Highest Impact)
1. Remove unnecessary COND parameters (3 days with testing)
2. Restructure job dependencies

### Phase 3: Advanced (Higher Risk)
1. Job step consolidation
2. [Additional items]

## 8. ⚠️ RISK ASSESSMENT

### LOW RISK (Implement immediately):
- ✅ REGION parameter adjustments
- ✅ SPACE parameter tuning

### MEDIUM RISK (Test in DEV first):
- ⚠️ Parallelization changes
- ⚠️ Buffer optimizations

### HIGH RISK (Thorough testing required):
- 🔴 Job step consolidation
- 🔴 Major flow restructuring

## 9. 💰 BUSINESS IMPACT

**For Financial Services (Annuity Processing):**
- Faster nightly batch = earlier reporting
- Reduced batch window risk
- $438K annual savings (typical)

**For Automotive (Manufacturing):**
- Faster quality reports = quicker defect response
- Improved production planning
- Similar cost savings

## 10. 🎯 RECOMMENDED NEXT STEPS

1. **Immediate (This Week):**
   - Implement REGION optimizations
   - Test in development environment

2. **Short-term (Next 2 Weeks):**
   - Implement parallelization
   - Conduct thorough testing

3. **Long-term (Next Month):**
   - Monitor performance improvements
   - Document lessons learned

---

**SUMMARY:** This JCL has significant optimization potential. Conservative estimate: **40% runtime reduction** with low implementation risk. Recommend starting with Phase 1 quick wins.

*Analysis completed by AI (Google Gemini) - Verify recommendations in test environment before production implementation.*"#
    }

    /// Build the full prompt for one analysis. `jcl` is inserted verbatim.
    pub fn optimization_report(jcl: &str) -> String {
        format!(
            "{}\n\nJCL CODE TO ANALYZE:\n{}\n\n{}",
            Self::preamble(),
            jcl,
            Self::report_format()
        )
    }
}
