//! Render functions for the TypeORM (repository-injection) backend.
//!
//! Services receive a `Repository<Entity>` via `@InjectRepository`; the
//! module wires the entity with `TypeOrmModule.forFeature`. The entity file
//! itself is owned by the operator (`./entities/<kebab>.entity.ts`), not
//! generated here.

use crate::domain::ModuleNames;

pub(super) fn service(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Injectable, NotFoundException }} from '@nestjs/common';
import {{ InjectRepository }} from '@nestjs/typeorm';
import {{ Repository }} from 'typeorm';
import {{ {pascal}Entity }} from './entities/{kebab}.entity';

@Injectable()
export class {pascal}Service {{
  constructor(
    @InjectRepository({pascal}Entity)
    private readonly repository: Repository<{pascal}Entity>
  ) {{}}

  async create(data: Partial<{pascal}Entity>) {{
    const entity = this.repository.create(data);
    return this.repository.save(entity);
  }}

  async findAll() {{
    return this.repository.find();
  }}

  async findOne(id: string) {{
    const item = await this.repository.findOne({{ where: {{ id }} }});
    if (!item) throw new NotFoundException(`{pascal} ${{id}} not found`);
    return item;
  }}

  async remove(id: string) {{
    const item = await this.findOne(id);
    return this.repository.softRemove(item);
  }}
}}
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}

pub(super) fn service_spec(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Test, TestingModule }} from '@nestjs/testing';
import {{ getRepositoryToken }} from '@nestjs/typeorm';
import {{ {pascal}Service }} from './{kebab}.service';
import {{ {pascal}Entity }} from './entities/{kebab}.entity';

describe('{pascal}Service', () => {{
  let service: {pascal}Service;

  beforeEach(async () => {{
    const module: TestingModule = await Test.createTestingModule({{
      providers: [
        {pascal}Service,
        {{ provide: getRepositoryToken({pascal}Entity), useValue: {{}} }},
      ],
    }}).compile();

    service = module.get<{pascal}Service>({pascal}Service);
  }});

  it('should be defined', () => {{
    expect(service).toBeDefined();
  }});
}});
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}

pub(super) fn controller(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Body, Controller, Get, Param, Post }} from '@nestjs/common';
import {{ {pascal}Service }} from './{kebab}.service';

@Controller('{kebab}s')
export class {pascal}Controller {{
  constructor(private readonly service: {pascal}Service) {{}}

  @Post()
  create(@Body() data: any) {{
    return this.service.create(data);
  }}

  @Get()
  findAll() {{
    return this.service.findAll();
  }}

  @Get(':id')
  findOne(@Param('id') id: string) {{
    return this.service.findOne(id);
  }}
}}
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}

pub(super) fn controller_spec(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Test, TestingModule }} from '@nestjs/testing';
import {{ {pascal}Controller }} from './{kebab}.controller';
import {{ {pascal}Service }} from './{kebab}.service';

describe('{pascal}Controller', () => {{
  let controller: {pascal}Controller;

  beforeEach(async () => {{
    const module: TestingModule = await Test.createTestingModule({{
      controllers: [{pascal}Controller],
      providers: [{{ provide: {pascal}Service, useValue: {{}} }}],
    }}).compile();

    controller = module.get<{pascal}Controller>({pascal}Controller);
  }});

  it('should be defined', () => {{
    expect(controller).toBeDefined();
  }});
}});
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}

pub(super) fn module(n: &ModuleNames) -> String {
    format!(
        r#"
import {{ Module }} from '@nestjs/common';
import {{ TypeOrmModule }} from '@nestjs/typeorm';
import {{ {pascal}Entity }} from './entities/{kebab}.entity';
import {{ {pascal}Controller }} from './{kebab}.controller';
import {{ {pascal}Service }} from './{kebab}.service';

@Module({{
  imports: [TypeOrmModule.forFeature([{pascal}Entity])],
  controllers: [{pascal}Controller],
  providers: [{pascal}Service],
  exports: [{pascal}Service],
}})
export class {pascal}Module {{}}
"#,
        pascal = n.pascal(),
        kebab = n.kebab(),
    )
}
