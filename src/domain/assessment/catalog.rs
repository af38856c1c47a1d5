//! Answer catalogs for the questionnaire's multiple-choice questions.
//!
//! One canonical catalog per question. Labels used by older questionnaire
//! revisions are accepted as aliases so every revision's answers score the
//! same way.

catalog! {
    /// Technologies that make up the current data infrastructure.
    pub enum Infrastructure {
        SqlServer => "SQL Server",
        Oracle => "Oracle",
        Azure => "Azure",
        Aws => "AWS",
        GoogleCloud => "Google Cloud",
        OnPremisesServers => "On-premises servers",
        HadoopSpark => "Hadoop/Spark",
        MongoDb => "MongoDB",
        /// Not offered by the questionnaire checkboxes; accepted from API
        /// callers and counted by the governance score.
        AzureDataFactory => "Azure Data Factory",
    }
}

impl Infrastructure {
    /// The entries offered as questionnaire checkboxes.
    pub fn questionnaire_options() -> Vec<Self> {
        Self::all()
            .into_iter()
            .filter(|entry| *entry != Infrastructure::AzureDataFactory)
            .collect()
    }
}

catalog! {
    /// Primary data warehouse solution.
    #[derive(Default)]
    pub enum WarehouseSolution {
        /// No answer given.
        #[default]
        Unspecified => "",
        AzureSynapse => "Azure Synapse" | "Azure SQL Data Warehouse",
        SqlServer => "SQL Server",
        Snowflake => "Snowflake",
        AwsRedshift => "AWS Redshift",
        GoogleBigQuery => "Google BigQuery",
        Oracle => "Oracle",
        Databricks => "Databricks",
        LegacyDataWarehouse => "Legacy Data Warehouse" | "Legacy System",
        CompetitorPlatform => "Competitor Platform",
        NoWarehouse => "None",
    }
}

impl WarehouseSolution {
    /// The entries offered in the questionnaire drop-down.
    pub fn questionnaire_options() -> Vec<Self> {
        vec![
            WarehouseSolution::AzureSynapse,
            WarehouseSolution::SqlServer,
            WarehouseSolution::Snowflake,
            WarehouseSolution::AwsRedshift,
            WarehouseSolution::GoogleBigQuery,
            WarehouseSolution::Oracle,
            WarehouseSolution::NoWarehouse,
        ]
    }

    /// Returns true for warehouses the platform replaces at the largest saving.
    pub fn is_legacy(&self) -> bool {
        matches!(self, WarehouseSolution::LegacyDataWarehouse)
    }

    /// Returns true for competing cloud analytics platforms.
    pub fn is_competitor_platform(&self) -> bool {
        matches!(
            self,
            WarehouseSolution::Snowflake
                | WarehouseSolution::Databricks
                | WarehouseSolution::CompetitorPlatform
        )
    }
}

catalog! {
    /// Primary business intelligence tool.
    #[derive(Default)]
    pub enum BiTool {
        /// No answer given.
        #[default]
        Unspecified => "",
        PowerBi => "Power BI",
        Tableau => "Tableau",
        Qlik => "Qlik",
        Looker => "Looker",
        Excel => "Excel",
        SapBusinessObjects => "SAP BusinessObjects",
        SqlServerReportingServices => "SQL Server Reporting Services" | "SSRS",
        NoTool => "None",
    }
}

impl BiTool {
    /// The entries offered in the questionnaire drop-down.
    pub fn questionnaire_options() -> Vec<Self> {
        vec![
            BiTool::PowerBi,
            BiTool::Tableau,
            BiTool::Qlik,
            BiTool::Looker,
            BiTool::Excel,
            BiTool::SapBusinessObjects,
            BiTool::NoTool,
        ]
    }
}

catalog! {
    /// Kinds of data the organization works with.
    pub enum DataType {
        Structured => "Structured (relational databases)" | "Structured",
        SemiStructured => "Semi-structured (JSON, XML)" | "Semi-structured",
        Unstructured => "Unstructured (documents, emails)" | "Unstructured",
        /// The catalog's streaming source; older revisions asked for
        /// "Real-time streaming".
        IotSensor => "IoT/sensor data" | "Real-time streaming",
        ImagesVideo => "Images/video",
        Audio => "Audio",
        SocialMedia => "Social media data",
        LogFiles => "Log files",
    }
}

catalog! {
    /// Existing Microsoft product investments.
    pub enum MicrosoftProduct {
        Azure => "Azure",
        PowerBi => "Power BI",
        Microsoft365 => "Microsoft 365" | "Office/Microsoft 365",
        Dynamics365 => "Dynamics 365",
        SqlServer => "SQL Server",
        AzureSynapseAnalytics => "Azure Synapse Analytics",
        AzureDataFactory => "Azure Data Factory",
        SharePoint => "SharePoint",
    }
}

catalog! {
    /// Regulatory and compliance standards the data estate must meet.
    pub enum ComplianceStandard {
        Gdpr => "GDPR",
        Hipaa => "HIPAA",
        Ccpa => "CCPA",
        Sox => "SOX",
        PciDss => "PCI DSS",
        Iso27001 => "ISO 27001",
        FedRamp => "FedRAMP",
        IndustrySpecific => "Industry-specific",
    }
}
